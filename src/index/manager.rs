//! Node ↔ routing index translation.

use crate::RoutingError;

/// An index in the solver's internal address space.
///
/// Distinct from a node identity: every node has a canonical routing index,
/// and vehicles beyond the first own extra start/end indices that alias the
/// depot node.
pub type RoutingIndex = usize;

/// Maps between node identities and the routing index space.
///
/// For a single vehicle the mapping is the identity on `[0, num_nodes)`.
/// Each additional vehicle appends a start/end index pair that maps back to
/// the depot, giving an index space of size
/// `num_nodes + 2 * (num_vehicles - 1)`.
///
/// # Examples
///
/// ```
/// use routefirst::index::RoutingIndexManager;
///
/// let manager = RoutingIndexManager::new(5, 1, 0).unwrap();
/// assert_eq!(manager.num_indices(), 5);
/// assert_eq!(manager.index_to_node(3).unwrap(), 3);
/// assert_eq!(manager.node_to_index(3).unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingIndexManager {
    num_nodes: usize,
    num_vehicles: usize,
    depot: usize,
}

impl RoutingIndexManager {
    /// Creates a manager for `num_nodes` locations, `num_vehicles` vehicles,
    /// and the given depot node.
    ///
    /// Returns [`RoutingError::InvalidNode`] if `num_nodes` is zero or the
    /// depot is not a valid node, and [`RoutingError::InvalidVehicle`] if
    /// `num_vehicles` is zero.
    pub fn new(
        num_nodes: usize,
        num_vehicles: usize,
        depot: usize,
    ) -> Result<Self, RoutingError> {
        if num_vehicles == 0 {
            return Err(RoutingError::InvalidVehicle {
                vehicle: 0,
                num_vehicles: 0,
            });
        }
        if depot >= num_nodes {
            return Err(RoutingError::InvalidNode {
                node: depot,
                num_nodes,
            });
        }
        Ok(Self {
            num_nodes,
            num_vehicles,
            depot,
        })
    }

    /// Number of nodes in the problem.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of vehicles in the problem.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// The depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Size of the routing index space.
    ///
    /// Indices `[0, num_nodes)` are the nodes themselves; the remaining
    /// `2 * (num_vehicles - 1)` indices are start/end duplicates of the
    /// depot for vehicles beyond the first.
    pub fn num_indices(&self) -> usize {
        self.num_nodes + 2 * (self.num_vehicles - 1)
    }

    /// Translates a routing index back to its node identity.
    ///
    /// Duplicated vehicle start/end indices all resolve to the depot.
    /// Returns [`RoutingError::InvalidIndex`] outside `[0, num_indices())`.
    pub fn index_to_node(&self, index: RoutingIndex) -> Result<usize, RoutingError> {
        if index < self.num_nodes {
            Ok(index)
        } else if index < self.num_indices() {
            Ok(self.depot)
        } else {
            Err(RoutingError::InvalidIndex {
                index,
                limit: self.num_indices(),
            })
        }
    }

    /// Returns the canonical routing index of a node.
    ///
    /// Returns [`RoutingError::InvalidNode`] outside `[0, num_nodes())`.
    pub fn node_to_index(&self, node: usize) -> Result<RoutingIndex, RoutingError> {
        if node < self.num_nodes {
            Ok(node)
        } else {
            Err(RoutingError::InvalidNode {
                node,
                num_nodes: self.num_nodes,
            })
        }
    }

    /// Routing index where the given vehicle's route begins.
    ///
    /// Vehicle 0 starts at the depot's own index; vehicle `v >= 1` starts at
    /// `num_nodes + 2 * (v - 1)`.
    pub fn vehicle_start(&self, vehicle: usize) -> Result<RoutingIndex, RoutingError> {
        self.check_vehicle(vehicle)?;
        if vehicle == 0 {
            Ok(self.depot)
        } else {
            Ok(self.num_nodes + 2 * (vehicle - 1))
        }
    }

    /// Routing index where the given vehicle's route ends.
    pub fn vehicle_end(&self, vehicle: usize) -> Result<RoutingIndex, RoutingError> {
        self.check_vehicle(vehicle)?;
        if vehicle == 0 {
            Ok(self.depot)
        } else {
            Ok(self.num_nodes + 2 * (vehicle - 1) + 1)
        }
    }

    fn check_vehicle(&self, vehicle: usize) -> Result<(), RoutingError> {
        if vehicle < self.num_vehicles {
            Ok(())
        } else {
            Err(RoutingError::InvalidVehicle {
                vehicle,
                num_vehicles: self.num_vehicles,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vehicle_identity() {
        let m = RoutingIndexManager::new(5, 1, 0).expect("valid");
        assert_eq!(m.num_indices(), 5);
        for i in 0..5 {
            assert_eq!(m.index_to_node(i).expect("in range"), i);
            assert_eq!(m.node_to_index(i).expect("in range"), i);
        }
    }

    #[test]
    fn test_round_trip() {
        let m = RoutingIndexManager::new(7, 3, 2).expect("valid");
        for n in 0..7 {
            let idx = m.node_to_index(n).expect("valid node");
            assert_eq!(m.index_to_node(idx).expect("valid index"), n);
        }
    }

    #[test]
    fn test_duplicated_indices_resolve_to_depot() {
        let m = RoutingIndexManager::new(5, 3, 1).expect("valid");
        // 5 nodes + 2 * 2 duplicates
        assert_eq!(m.num_indices(), 9);
        for i in 5..9 {
            assert_eq!(m.index_to_node(i).expect("duplicate"), 1);
        }
    }

    #[test]
    fn test_vehicle_start_end() {
        let m = RoutingIndexManager::new(5, 3, 1).expect("valid");
        assert_eq!(m.vehicle_start(0).expect("v0"), 1);
        assert_eq!(m.vehicle_end(0).expect("v0"), 1);
        assert_eq!(m.vehicle_start(1).expect("v1"), 5);
        assert_eq!(m.vehicle_end(1).expect("v1"), 6);
        assert_eq!(m.vehicle_start(2).expect("v2"), 7);
        assert_eq!(m.vehicle_end(2).expect("v2"), 8);
    }

    #[test]
    fn test_index_out_of_range() {
        let m = RoutingIndexManager::new(5, 1, 0).expect("valid");
        assert_eq!(
            m.index_to_node(5),
            Err(RoutingError::InvalidIndex { index: 5, limit: 5 })
        );
    }

    #[test]
    fn test_node_out_of_range() {
        let m = RoutingIndexManager::new(5, 2, 0).expect("valid");
        // Index 5 is vehicle 1's start, but 5 is not a node.
        assert_eq!(
            m.node_to_index(5),
            Err(RoutingError::InvalidNode { node: 5, num_nodes: 5 })
        );
    }

    #[test]
    fn test_invalid_depot() {
        assert_eq!(
            RoutingIndexManager::new(3, 1, 3),
            Err(RoutingError::InvalidNode { node: 3, num_nodes: 3 })
        );
    }

    #[test]
    fn test_zero_nodes() {
        assert!(RoutingIndexManager::new(0, 1, 0).is_err());
    }

    #[test]
    fn test_zero_vehicles() {
        assert_eq!(
            RoutingIndexManager::new(5, 0, 0),
            Err(RoutingError::InvalidVehicle { vehicle: 0, num_vehicles: 0 })
        );
    }

    #[test]
    fn test_vehicle_out_of_range() {
        let m = RoutingIndexManager::new(5, 2, 0).expect("valid");
        assert_eq!(
            m.vehicle_start(2),
            Err(RoutingError::InvalidVehicle { vehicle: 2, num_vehicles: 2 })
        );
    }

    #[test]
    fn test_single_node_problem() {
        let m = RoutingIndexManager::new(1, 1, 0).expect("valid");
        assert_eq!(m.num_indices(), 1);
        assert_eq!(m.index_to_node(0).expect("depot"), 0);
    }
}
