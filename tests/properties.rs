//! Property-based tests for construction determinism and index mapping.

use proptest::prelude::*;

use routefirst::constructive::path_cheapest_arc;
use routefirst::distance::TransitMatrix;
use routefirst::evaluation::RouteEvaluator;
use routefirst::index::RoutingIndexManager;
use routefirst::local_search::two_opt_improve;
use routefirst::model::RoutingModel;
use routefirst::transit::TransitFn;

/// Builds a solvable model over an explicit cost matrix.
fn matrix_model(num_nodes: usize, costs: Vec<i64>) -> RoutingModel {
    let manager = RoutingIndexManager::new(num_nodes, 1, 0).expect("valid manager");
    let mut model = RoutingModel::new(manager);
    let matrix = TransitMatrix::from_data(num_nodes, costs).expect("sized data");
    let handle = model.register_transit_matrix(matrix).expect("sized matrix");
    model
        .set_arc_cost_evaluator_of_all_vehicles(handle)
        .expect("handle just registered");
    model
}

/// Strategy generating a `full`×`full` grid of non-negative costs with a
/// zero diagonal.
fn cost_grid(full: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(0i64..1_000, full * full).prop_map(move |mut costs| {
        for i in 0..full {
            costs[i * full + i] = 0;
        }
        costs
    })
}

/// Takes the top-left n×n corner of a `full`×`full` grid.
fn shrink_grid(costs: &[i64], full: usize, n: usize) -> Vec<i64> {
    let mut sub = Vec::with_capacity(n * n);
    for from in 0..n {
        for to in 0..n {
            sub.push(costs[from * full + to]);
        }
    }
    sub
}

proptest! {
    /// Nodes on a line with cost `|i - j|` are visited in ascending order
    /// and the objective is twice the line length.
    #[test]
    fn line_objective_is_twice_span(n in 1usize..40) {
        let manager = RoutingIndexManager::new(n, 1, 0).expect("valid manager");
        let mut model = RoutingModel::new(manager);
        let transit = model.register_transit_callback(move |from, to| {
            (to as i64 - from as i64).abs()
        });
        model
            .set_arc_cost_evaluator_of_all_vehicles(transit)
            .expect("handle just registered");

        let solution = model.solve().expect("feasible");
        prop_assert_eq!(solution.objective_value(), 2 * (n as i64 - 1));
        let expected: Vec<usize> = (1..n).collect();
        prop_assert_eq!(solution.routes()[0].nodes(), expected);
    }

    /// Solving the same model twice yields identical solutions.
    #[test]
    fn solve_is_deterministic(n in 2usize..12, costs in cost_grid(11)) {
        let model = matrix_model(n, shrink_grid(&costs, 11, n));
        let first = model.solve().expect("complete graph is feasible");
        let second = model.solve().expect("complete graph is feasible");
        prop_assert_eq!(first, second);
    }

    /// Every constructed solution visits each non-depot node exactly once.
    #[test]
    fn construction_visits_every_node_once(n in 2usize..12, costs in cost_grid(11)) {
        let model = matrix_model(n, shrink_grid(&costs, 11, n));
        let solution = model.solve().expect("complete graph is feasible");
        let mut nodes = solution.routes()[0].nodes();
        nodes.sort_unstable();
        let expected: Vec<usize> = (1..n).collect();
        prop_assert_eq!(nodes, expected);
    }

    /// Node → index → node is the identity for every valid node.
    #[test]
    fn index_round_trip(num_nodes in 1usize..50, num_vehicles in 1usize..5, depot_seed in 0usize..50) {
        let depot = depot_seed % num_nodes;
        let manager = RoutingIndexManager::new(num_nodes, num_vehicles, depot)
            .expect("valid manager");
        for node in 0..num_nodes {
            let index = manager.node_to_index(node).expect("valid node");
            prop_assert_eq!(manager.index_to_node(index).expect("valid index"), node);
        }
        // Every duplicated start/end index resolves to the depot.
        for index in num_nodes..manager.num_indices() {
            prop_assert_eq!(manager.index_to_node(index).expect("duplicate"), depot);
        }
    }

    /// 2-opt never increases the cost of a constructed route.
    #[test]
    fn two_opt_never_worsens(n in 2usize..10, costs in cost_grid(9)) {
        let manager = RoutingIndexManager::new(n, 1, 0).expect("valid manager");
        let matrix = TransitMatrix::from_data(n, shrink_grid(&costs, 9, n)).expect("sized data");
        let transit = matrix.into_transit_callback(manager);

        let orders = path_cheapest_arc(&manager, &[&*transit as &TransitFn])
            .expect("complete graph is feasible");
        let built = &orders[0];

        let evaluator = RouteEvaluator::new(&manager, &*transit);
        let built_cost = evaluator.order_cost(0, built).expect("feasible");
        let (_, improved_cost) =
            two_opt_improve(built, 0, &manager, &*transit).expect("feasible");
        prop_assert!(improved_cost <= built_cost);
    }
}
