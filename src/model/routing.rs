//! Routing model: registration, evaluator assignment, and solving.

use log::debug;

use crate::constructive::RouteBuilder;
use crate::distance::TransitMatrix;
use crate::evaluation::RouteEvaluator;
use crate::index::{RoutingIndex, RoutingIndexManager};
use crate::local_search::two_opt_improve;
use crate::models::Solution;
use crate::search::{LocalSearch, SearchParameters};
use crate::transit::{CallbackHandle, Cost, TransitCallbackRegistry, TransitFn};
use crate::RoutingError;

/// A routing problem instance ready to solve.
///
/// Callbacks are registered up front and referenced by handle; each vehicle
/// must have an arc cost evaluator assigned before solving. Solving never
/// mutates the model, so repeated solves are deterministic and independent.
///
/// # Examples
///
/// ```
/// use routefirst::index::RoutingIndexManager;
/// use routefirst::model::RoutingModel;
///
/// let manager = RoutingIndexManager::new(5, 1, 0).unwrap();
/// let mut model = RoutingModel::new(manager);
///
/// let m = *model.index_manager();
/// let transit = model.register_transit_callback(move |from, to| {
///     let from = m.index_to_node(from).unwrap();
///     let to = m.index_to_node(to).unwrap();
///     (to as i64 - from as i64).abs()
/// });
/// model.set_arc_cost_evaluator_of_all_vehicles(transit).unwrap();
///
/// let solution = model.solve().unwrap();
/// // 0 →(1) 1 →(1) 2 →(1) 3 →(1) 4 →(4) 0
/// assert_eq!(solution.objective_value(), 8);
/// assert_eq!(solution.routes()[0].nodes(), vec![1, 2, 3, 4]);
/// ```
pub struct RoutingModel {
    manager: RoutingIndexManager,
    registry: TransitCallbackRegistry,
    cost_evaluators: Vec<Option<CallbackHandle>>,
}

impl RoutingModel {
    /// Creates a model over the given index space.
    pub fn new(manager: RoutingIndexManager) -> Self {
        let cost_evaluators = vec![None; manager.num_vehicles()];
        Self {
            manager,
            registry: TransitCallbackRegistry::new(),
            cost_evaluators,
        }
    }

    /// The index manager this model was built over.
    pub fn index_manager(&self) -> &RoutingIndexManager {
        &self.manager
    }

    /// Registers an arc cost function and returns its handle.
    ///
    /// The callback receives routing indices, not node identities; convert
    /// through the index manager as needed. It must be pure for solves to
    /// stay deterministic.
    pub fn register_transit_callback<F>(&mut self, callback: F) -> CallbackHandle
    where
        F: Fn(RoutingIndex, RoutingIndex) -> Cost + Send + Sync + 'static,
    {
        self.registry.register(Box::new(callback))
    }

    /// Registers a cost matrix as a transit callback.
    ///
    /// Returns [`RoutingError::InvalidNode`] if the matrix covers fewer
    /// nodes than the model.
    pub fn register_transit_matrix(
        &mut self,
        matrix: TransitMatrix,
    ) -> Result<CallbackHandle, RoutingError> {
        if matrix.size() < self.manager.num_nodes() {
            return Err(RoutingError::InvalidNode {
                node: self.manager.num_nodes() - 1,
                num_nodes: matrix.size(),
            });
        }
        Ok(self
            .registry
            .register(matrix.into_transit_callback(self.manager)))
    }

    /// Assigns the arc cost evaluator used for every vehicle.
    ///
    /// The handle is validated eagerly: one never returned by registration
    /// on this model fails with [`RoutingError::UnregisteredCallback`]
    /// rather than silently pricing arcs at zero.
    pub fn set_arc_cost_evaluator_of_all_vehicles(
        &mut self,
        handle: CallbackHandle,
    ) -> Result<(), RoutingError> {
        self.registry.get(handle)?;
        for evaluator in &mut self.cost_evaluators {
            *evaluator = Some(handle);
        }
        Ok(())
    }

    /// Assigns the arc cost evaluator for a single vehicle.
    pub fn set_arc_cost_evaluator_of_vehicle(
        &mut self,
        handle: CallbackHandle,
        vehicle: usize,
    ) -> Result<(), RoutingError> {
        self.registry.get(handle)?;
        if vehicle >= self.manager.num_vehicles() {
            return Err(RoutingError::InvalidVehicle {
                vehicle,
                num_vehicles: self.manager.num_vehicles(),
            });
        }
        self.cost_evaluators[vehicle] = Some(handle);
        Ok(())
    }

    /// Solves with default search parameters.
    pub fn solve(&self) -> Result<Solution, RoutingError> {
        self.solve_with_parameters(&SearchParameters::default())
    }

    /// Solves with explicit search parameters.
    ///
    /// Constructs first solutions with the configured strategy, applies the
    /// configured improvement pass per route, and prices every route
    /// through its vehicle's evaluator.
    ///
    /// Fails with [`RoutingError::MissingEvaluator`] if any vehicle has no
    /// arc cost evaluator assigned, and [`RoutingError::Infeasible`] if
    /// construction cannot visit every node.
    pub fn solve_with_parameters(
        &self,
        parameters: &SearchParameters,
    ) -> Result<Solution, RoutingError> {
        let transits = self.vehicle_transits()?;

        let mut builder = RouteBuilder::new(&self.manager);
        let mut orders = builder.build(parameters.first_solution_strategy, &transits)?;
        debug!(
            "first solution built: strategy {:?}, {} route(s)",
            parameters.first_solution_strategy.resolve(),
            orders.len()
        );

        if parameters.local_search == LocalSearch::TwoOpt {
            for (vehicle, order) in orders.iter_mut().enumerate() {
                let (improved, _) =
                    two_opt_improve(order, vehicle, &self.manager, transits[vehicle])?;
                *order = improved;
            }
        }

        let mut solution = Solution::new();
        for (vehicle, order) in orders.iter().enumerate() {
            let evaluator = RouteEvaluator::new(&self.manager, transits[vehicle]);
            solution.add_route(evaluator.build_route(vehicle, order)?);
        }

        debug!("solve finished: objective {}", solution.objective_value());
        Ok(solution)
    }

    /// Resolves every vehicle's assigned evaluator against the registry.
    fn vehicle_transits(&self) -> Result<Vec<&TransitFn>, RoutingError> {
        let mut transits = Vec::with_capacity(self.cost_evaluators.len());
        for (vehicle, &evaluator) in self.cost_evaluators.iter().enumerate() {
            let handle = evaluator.ok_or(RoutingError::MissingEvaluator { vehicle })?;
            transits.push(&**self.registry.get(handle)?);
        }
        Ok(transits)
    }
}

impl std::fmt::Debug for RoutingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingModel")
            .field("manager", &self.manager)
            .field("registry", &self.registry)
            .field("cost_evaluators", &self.cost_evaluators)
            .finish()
    }
}
