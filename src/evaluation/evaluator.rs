//! Route evaluator that computes per-visit and total transit costs.

use crate::index::RoutingIndexManager;
use crate::models::{Route, Visit};
use crate::transit::{Cost, TransitFn};
use crate::RoutingError;

/// Prices visit orders through a transit callback.
///
/// The evaluator walks a route arc by arc, translating nodes to routing
/// indices before each callback invocation, and folds the closing arc to
/// the vehicle end into the total.
///
/// # Examples
///
/// ```
/// use routefirst::evaluation::RouteEvaluator;
/// use routefirst::index::RoutingIndexManager;
///
/// let manager = RoutingIndexManager::new(5, 1, 0).unwrap();
/// let transit = |from: usize, to: usize| (to as i64 - from as i64).abs();
/// let evaluator = RouteEvaluator::new(&manager, &transit);
///
/// let route = evaluator.build_route(0, &[1, 2, 3, 4]).unwrap();
/// // 0→1→2→3→4 costs 1 each, then 4→0 closes for 4.
/// assert_eq!(route.total_cost(), 8);
/// ```
pub struct RouteEvaluator<'a> {
    manager: &'a RoutingIndexManager,
    transit: &'a TransitFn,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator over the given index space and callback.
    pub fn new(manager: &'a RoutingIndexManager, transit: &'a TransitFn) -> Self {
        Self { manager, transit }
    }

    /// Builds a costed route from a node visit order.
    ///
    /// The order excludes the vehicle's start and end; both are supplied by
    /// the index manager. An empty order on a vehicle whose start and end
    /// coincide prices as zero; otherwise the start→end arc is charged.
    ///
    /// Returns [`RoutingError::Infeasible`] if any traversed arc is absent
    /// (negative transit cost).
    pub fn build_route(&self, vehicle: usize, order: &[usize]) -> Result<Route, RoutingError> {
        let start = self.manager.vehicle_start(vehicle)?;
        let end = self.manager.vehicle_end(vehicle)?;

        let mut route = Route::new(vehicle);
        let mut total: Cost = 0;
        let mut prev = start;

        for &node in order {
            let next = self.manager.node_to_index(node)?;
            let transit = (self.transit)(prev, next);
            if transit < 0 {
                return Err(RoutingError::Infeasible {
                    node: self.manager.index_to_node(prev)?,
                });
            }
            total += transit;
            route.push_visit(Visit {
                node,
                transit,
                cumulative: total,
            });
            prev = next;
        }

        // Close the route. A vehicle that starts and ends on the same index
        // with nothing to visit never leaves, so no arc is charged.
        if !(order.is_empty() && start == end) {
            let closing = (self.transit)(prev, end);
            if closing < 0 {
                return Err(RoutingError::Infeasible {
                    node: self.manager.index_to_node(prev)?,
                });
            }
            total += closing;
        }

        route.set_total_cost(total);
        Ok(route)
    }

    /// Total cost of a visit order without materializing the route.
    pub fn order_cost(&self, vehicle: usize, order: &[usize]) -> Result<Cost, RoutingError> {
        Ok(self.build_route(vehicle, order)?.total_cost())
    }
}
