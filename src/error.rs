//! Error taxonomy for the routing kernel.

use thiserror::Error;

/// Errors reported by the routing kernel.
///
/// Every failure is a distinct, inspectable variant; nothing is retried
/// internally. Retrying with a different strategy is a caller decision.
///
/// # Examples
///
/// ```
/// use routefirst::index::RoutingIndexManager;
/// use routefirst::RoutingError;
///
/// let manager = RoutingIndexManager::new(5, 1, 0).unwrap();
/// let err = manager.index_to_node(9).unwrap_err();
/// assert_eq!(err, RoutingError::InvalidIndex { index: 9, limit: 5 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// A routing index fell outside `[0, limit)`.
    #[error("routing index {index} out of range 0..{limit}")]
    InvalidIndex {
        /// The offending routing index.
        index: usize,
        /// Exclusive upper bound of the index space.
        limit: usize,
    },

    /// A node identity fell outside `[0, num_nodes)`.
    #[error("node {node} out of range 0..{num_nodes}")]
    InvalidNode {
        /// The offending node.
        node: usize,
        /// Number of nodes in the problem.
        num_nodes: usize,
    },

    /// A vehicle id fell outside `[0, num_vehicles)`.
    #[error("vehicle {vehicle} out of range 0..{num_vehicles}")]
    InvalidVehicle {
        /// The offending vehicle id.
        vehicle: usize,
        /// Number of vehicles in the problem.
        num_vehicles: usize,
    },

    /// A callback handle was never returned by `register`.
    #[error("transit callback handle {handle} was never registered")]
    UnregisteredCallback {
        /// Raw value of the unknown handle.
        handle: usize,
    },

    /// A vehicle has no arc cost evaluator assigned.
    #[error("no arc cost evaluator assigned to vehicle {vehicle}")]
    MissingEvaluator {
        /// The vehicle lacking an evaluator.
        vehicle: usize,
    },

    /// Route construction could not visit every node.
    #[error("no feasible successor from node {node}")]
    Infeasible {
        /// Last node reached before construction stalled.
        node: usize,
    },
}
