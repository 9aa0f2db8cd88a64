//! Dense transit cost matrix.

use crate::index::RoutingIndexManager;
use crate::transit::{Cost, TransitCallback};

/// A dense n×n transit cost matrix stored in row-major order.
///
/// Costs are integers; a negative entry marks an absent arc, consistent
/// with the transit callback contract.
///
/// # Examples
///
/// ```
/// use routefirst::distance::TransitMatrix;
///
/// let m = TransitMatrix::from_data(2, vec![0, 5, 7, 0]).unwrap();
/// assert_eq!(m.get(0, 1), 5);
/// assert_eq!(m.get(1, 0), 7);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TransitMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl TransitMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<Cost>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Computes each entry from a node-pair cost function.
    pub fn from_fn<F>(size: usize, mut cost: F) -> Self
    where
        F: FnMut(usize, usize) -> Cost,
    {
        let mut m = Self::new(size);
        for from in 0..size {
            for to in 0..size {
                m.set(from, to, cost(from, to));
            }
        }
        m
    }

    /// Returns the cost from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either node is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> Cost {
        self.data[from * self.size + to]
    }

    /// Sets the cost from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: Cost) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the cheapest reachable candidate from `from`.
    ///
    /// Candidates with negative (absent) arcs are skipped; ties resolve to
    /// the candidate listed first. Returns `None` if nothing is reachable.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, Cost)> = None;
        for &c in candidates {
            let cost = self.get(from, c);
            if cost < 0 {
                continue;
            }
            match best {
                Some((_, b)) if cost >= b => {}
                _ => best = Some((c, cost)),
            }
        }
        best.map(|(c, _)| c)
    }

    /// Converts this matrix into a transit callback over routing indices.
    ///
    /// The callback translates indices to nodes through the manager, so
    /// duplicated vehicle start/end indices price as the depot. Indices
    /// outside the manager's space yield a negative (absent) arc.
    pub fn into_transit_callback(self, manager: RoutingIndexManager) -> TransitCallback {
        Box::new(move |from, to| {
            match (manager.index_to_node(from), manager.index_to_node(to)) {
                (Ok(f), Ok(t)) => self.get(f, t),
                _ => -1,
            }
        })
    }
}
