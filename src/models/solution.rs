//! Solution type.

use serde::{Deserialize, Serialize};

use super::Route;
use crate::transit::Cost;

/// A complete solution to a routing problem.
///
/// Contains one route per vehicle and the total objective value: the sum
/// of transit costs over every constructed arc, closing arcs included.
///
/// # Examples
///
/// ```
/// use routefirst::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(0));
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.objective_value(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    objective: Cost,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            objective: 0,
        }
    }

    /// Adds a route and folds its cost into the objective.
    pub fn add_route(&mut self, route: Route) {
        self.objective += route.total_cost();
        self.routes.push(route);
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (one per vehicle).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total objective value of this solution.
    pub fn objective_value(&self) -> Cost {
        self.objective
    }

    /// Total number of nodes visited across all routes.
    pub fn num_visited(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}

impl Default for Solution {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Visit;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.objective_value(), 0);
        assert_eq!(sol.num_visited(), 0);
    }

    #[test]
    fn test_solution_accumulates_objective() {
        let mut sol = Solution::new();

        let mut r1 = Route::new(0);
        r1.push_visit(Visit {
            node: 1,
            transit: 3,
            cumulative: 3,
        });
        r1.set_total_cost(6);

        let mut r2 = Route::new(1);
        r2.push_visit(Visit {
            node: 2,
            transit: 4,
            cumulative: 4,
        });
        r2.push_visit(Visit {
            node: 3,
            transit: 1,
            cumulative: 5,
        });
        r2.set_total_cost(9);

        sol.add_route(r1);
        sol.add_route(r2);

        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_visited(), 3);
        assert_eq!(sol.objective_value(), 15);
    }

    #[test]
    fn test_solution_default() {
        let sol = Solution::default();
        assert_eq!(sol.num_routes(), 0);
    }
}
