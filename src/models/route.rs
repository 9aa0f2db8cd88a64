//! Route and visit types.

use serde::{Deserialize, Serialize};

use crate::transit::Cost;

/// A single visit to a node within a route.
///
/// Tracks the node identity along with the transit cost of the arc that
/// reached it and the cost accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Node being visited.
    pub node: usize,
    /// Transit cost of the arc into this node.
    pub transit: Cost,
    /// Cumulative transit cost up to and including this visit.
    pub cumulative: Cost,
}

/// An ordered sequence of node visits assigned to a single vehicle.
///
/// A route starts and ends at the vehicle's start/end positions (not stored
/// in `visits`). Routes are built once per solve and never mutated
/// afterward; a new solve produces a new route.
///
/// # Examples
///
/// ```
/// use routefirst::models::{Route, Visit};
///
/// let mut route = Route::new(0);
/// route.push_visit(Visit { node: 1, transit: 1, cumulative: 1 });
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.vehicle_id(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    vehicle_id: usize,
    visits: Vec<Visit>,
    total_cost: Cost,
}

impl Route {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle_id: usize) -> Self {
        Self {
            vehicle_id,
            visits: Vec::new(),
            total_cost: 0,
        }
    }

    /// Appends a visit to the end of this route.
    pub fn push_visit(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Returns the ordered sequence of visits.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Returns the number of node visits (excluding start/end).
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// Returns `true` if this route has no node visits.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// Returns the node identities in visit order.
    pub fn nodes(&self) -> Vec<usize> {
        self.visits.iter().map(|v| v.node).collect()
    }

    /// Total cost of this route, including the closing arc (set by the
    /// evaluator).
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Sets the total cost (used by the evaluator).
    pub fn set_total_cost(&mut self, cost: Cost) {
        self.total_cost = cost;
    }
}
