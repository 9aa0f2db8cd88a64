//! Intra-route 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in the visit order, compute the cost
//! change from reversing the segment `[i..=j]`:
//!
//! ```text
//! delta = t(prev_i, order[j]) + t(order[i], next_j)
//!       - t(prev_i, order[i]) - t(order[j], next_j)
//! ```
//!
//! A candidate with `delta < 0` is applied tentatively and kept only if the
//! recomputed tour cost actually drops, which keeps the pass honest for
//! asymmetric transit costs (the delta formula only prices the two swapped
//! boundary arcs). Repeat until a full sweep finds no improvement.
//!
//! # Complexity
//!
//! O(n²) candidate pairs per sweep, O(n) verification per accepted swap.

use crate::evaluation::RouteEvaluator;
use crate::index::{RoutingIndex, RoutingIndexManager};
use crate::transit::{Cost, TransitFn};
use crate::RoutingError;

/// Applies 2-opt improvement to a single vehicle's visit order.
///
/// The order excludes the vehicle's start and end positions. Returns the
/// improved order and its total cost (closing arc included). Swaps that
/// would traverse an absent arc are rejected.
///
/// Returns [`RoutingError::Infeasible`] only if the input order itself is
/// not traversable.
///
/// # Examples
///
/// ```
/// use routefirst::distance::TransitMatrix;
/// use routefirst::index::RoutingIndexManager;
/// use routefirst::local_search::two_opt_improve;
///
/// let manager = RoutingIndexManager::new(4, 1, 0).unwrap();
/// // Nodes on a line at positions 0, 1, 10, 11.
/// let pos = [0i64, 1, 10, 11];
/// let matrix = TransitMatrix::from_fn(4, |f, t| (pos[t] - pos[f]).abs());
/// let transit = matrix.into_transit_callback(manager);
///
/// let (improved, cost) = two_opt_improve(&[2, 1, 3], 0, &manager, &transit).unwrap();
/// assert_eq!(improved, vec![1, 2, 3]);
/// assert_eq!(cost, 22);
/// ```
pub fn two_opt_improve(
    order: &[usize],
    vehicle: usize,
    manager: &RoutingIndexManager,
    transit: &TransitFn,
) -> Result<(Vec<usize>, Cost), RoutingError> {
    let evaluator = RouteEvaluator::new(manager, transit);
    let mut cost = evaluator.order_cost(vehicle, order)?;
    if order.len() < 2 {
        return Ok((order.to_vec(), cost));
    }

    let start = manager.vehicle_start(vehicle)?;
    let end = manager.vehicle_end(vehicle)?;

    let mut current = order.to_vec();
    let mut improved = true;

    while improved {
        improved = false;
        let n = current.len();

        for i in 0..n - 1 {
            for j in i + 1..n {
                if two_opt_delta(&current, start, end, transit, i, j) >= 0 {
                    continue;
                }
                current[i..=j].reverse();
                match tour_cost(&current, start, end, transit) {
                    Some(c) if c < cost => {
                        cost = c;
                        improved = true;
                    }
                    _ => current[i..=j].reverse(),
                }
            }
        }
    }

    Ok((current, cost))
}

/// Cost change from reversing `order[i..=j]`, pricing the two boundary arcs.
///
/// Before: `prev_i → order[i] … order[j] → next_j`
/// After:  `prev_i → order[j] … order[i] → next_j`
///
/// Returns 0 (no improvement) if either new boundary arc is absent.
fn two_opt_delta(
    order: &[usize],
    start: RoutingIndex,
    end: RoutingIndex,
    transit: &TransitFn,
    i: usize,
    j: usize,
) -> Cost {
    let n = order.len();
    let prev_i = if i == 0 { start } else { order[i - 1] };
    let next_j = if j == n - 1 { end } else { order[j + 1] };

    let new_in = transit(prev_i, order[j]);
    let new_out = transit(order[i], next_j);
    if new_in < 0 || new_out < 0 {
        return 0;
    }

    let old_in = transit(prev_i, order[i]);
    let old_out = transit(order[j], next_j);

    new_in + new_out - old_in - old_out
}

/// Total cost of `start → order[0] → … → order[n-1] → end`.
///
/// Returns `None` if any arc is absent.
fn tour_cost(
    order: &[usize],
    start: RoutingIndex,
    end: RoutingIndex,
    transit: &TransitFn,
) -> Option<Cost> {
    let mut total: Cost = 0;
    let mut prev = start;
    for &node in order {
        let t = transit(prev, node);
        if t < 0 {
            return None;
        }
        total += t;
        prev = node;
    }
    let closing = transit(prev, end);
    if closing < 0 {
        return None;
    }
    Some(total + closing)
}
