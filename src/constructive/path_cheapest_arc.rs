//! Cheapest-arc first-solution construction.
//!
//! Builds routes greedily: starting from the vehicle's start position,
//! always extend with the unvisited node whose incoming arc is cheapest.
//! Ties resolve to the lowest node identity, keeping construction
//! deterministic.
//!
//! # Complexity
//!
//! O(n²) over all vehicles, where n = number of nodes.

use log::trace;

use crate::index::RoutingIndexManager;
use crate::search::FirstSolutionStrategy;
use crate::transit::{Cost, TransitFn};
use crate::RoutingError;

/// Constructs visit orders for every vehicle using cheapest-arc extension.
///
/// `transits` supplies one arc cost function per vehicle, indexed by
/// vehicle id. Vehicles are processed in id order and share the visited
/// set: with no capacity constraints the first vehicle absorbs every node
/// it can reach, and later vehicles only serve what earlier ones could
/// not. Candidates whose incoming arc is absent (negative cost) are
/// skipped.
///
/// Returns one visit order per vehicle, each excluding the start/end
/// positions, or [`RoutingError::Infeasible`] if nodes remain unvisited
/// after every vehicle's route has closed.
///
/// # Examples
///
/// ```
/// use routefirst::constructive::path_cheapest_arc;
/// use routefirst::index::RoutingIndexManager;
/// use routefirst::transit::TransitFn;
///
/// let manager = RoutingIndexManager::new(5, 1, 0).unwrap();
/// let transit = |from: usize, to: usize| (to as i64 - from as i64).abs();
/// let orders = path_cheapest_arc(&manager, &[&transit as &TransitFn]).unwrap();
/// // Nearest node first at every step: ascending order along the line.
/// assert_eq!(orders, vec![vec![1, 2, 3, 4]]);
/// ```
pub fn path_cheapest_arc(
    manager: &RoutingIndexManager,
    transits: &[&TransitFn],
) -> Result<Vec<Vec<usize>>, RoutingError> {
    let n = manager.num_nodes();
    let mut visited = vec![false; n];
    visited[manager.depot()] = true;
    let mut remaining = n - 1;

    let mut orders = Vec::with_capacity(manager.num_vehicles());
    let mut stalled_at = manager.depot();

    for vehicle in 0..manager.num_vehicles() {
        let transit = *transits
            .get(vehicle)
            .ok_or(RoutingError::MissingEvaluator { vehicle })?;

        let mut order = Vec::new();
        let mut current = manager.vehicle_start(vehicle)?;

        while remaining > 0 {
            let mut best: Option<(usize, Cost)> = None;
            for node in 0..n {
                if visited[node] {
                    continue;
                }
                let cost = transit(current, manager.node_to_index(node)?);
                if cost < 0 {
                    continue;
                }
                // Strictly cheaper only: an ascending scan keeps ties on
                // the lowest node identity.
                match best {
                    Some((_, b)) if cost >= b => {}
                    _ => best = Some((node, cost)),
                }
            }

            match best {
                Some((node, cost)) => {
                    visited[node] = true;
                    remaining -= 1;
                    current = manager.node_to_index(node)?;
                    trace!("vehicle {vehicle}: extend to node {node} (arc cost {cost})");
                    order.push(node);
                }
                None => {
                    stalled_at = manager.index_to_node(current)?;
                    break;
                }
            }
        }

        trace!("vehicle {vehicle}: route closed with {} visits", order.len());
        orders.push(order);
    }

    if remaining > 0 {
        return Err(RoutingError::Infeasible { node: stalled_at });
    }
    Ok(orders)
}

/// Construction progress of a single solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No construction attempted yet.
    Unbuilt,
    /// Construction in progress.
    Building,
    /// Construction finished with every node visited.
    Solved,
    /// Construction stalled with nodes left unvisited.
    Infeasible,
}

/// Stateful first-solution builder for one solve invocation.
///
/// Dispatches on the configured [`FirstSolutionStrategy`] and tracks the
/// construction state machine: `Unbuilt → Building`, then `Solved` or
/// `Infeasible`. Each solve owns a fresh builder; calling
/// [`build`](Self::build) again restarts construction and, construction
/// being deterministic, reproduces the previous outcome.
///
/// # Examples
///
/// ```
/// use routefirst::constructive::{BuilderState, RouteBuilder};
/// use routefirst::index::RoutingIndexManager;
/// use routefirst::search::FirstSolutionStrategy;
/// use routefirst::transit::TransitFn;
///
/// let manager = RoutingIndexManager::new(3, 1, 0).unwrap();
/// let transit = |from: usize, to: usize| (to as i64 - from as i64).abs();
///
/// let mut builder = RouteBuilder::new(&manager);
/// assert_eq!(builder.state(), BuilderState::Unbuilt);
///
/// let orders = builder
///     .build(FirstSolutionStrategy::PathCheapestArc, &[&transit as &TransitFn])
///     .unwrap();
/// assert_eq!(builder.state(), BuilderState::Solved);
/// assert_eq!(orders, vec![vec![1, 2]]);
/// ```
#[derive(Debug)]
pub struct RouteBuilder<'a> {
    manager: &'a RoutingIndexManager,
    state: BuilderState,
}

impl<'a> RouteBuilder<'a> {
    /// Creates an unbuilt builder over the given index space.
    pub fn new(manager: &'a RoutingIndexManager) -> Self {
        Self {
            manager,
            state: BuilderState::Unbuilt,
        }
    }

    /// Current construction state.
    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Runs first-solution construction with the given strategy.
    ///
    /// `transits` supplies one arc cost function per vehicle. The argument
    /// list is validated before construction starts, so a short `transits`
    /// slice fails with [`RoutingError::MissingEvaluator`] while the
    /// builder is still `Unbuilt`; once building, the only failure is
    /// [`RoutingError::Infeasible`].
    pub fn build(
        &mut self,
        strategy: FirstSolutionStrategy,
        transits: &[&TransitFn],
    ) -> Result<Vec<Vec<usize>>, RoutingError> {
        if transits.len() < self.manager.num_vehicles() {
            return Err(RoutingError::MissingEvaluator {
                vehicle: transits.len(),
            });
        }

        self.state = BuilderState::Building;
        let result = match strategy.resolve() {
            FirstSolutionStrategy::Automatic | FirstSolutionStrategy::PathCheapestArc => {
                path_cheapest_arc(self.manager, transits)
            }
        };

        match result {
            Ok(orders) => {
                self.state = BuilderState::Solved;
                Ok(orders)
            }
            Err(err) => {
                self.state = BuilderState::Infeasible;
                Err(err)
            }
        }
    }
}
