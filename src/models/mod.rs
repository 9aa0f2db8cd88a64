//! Domain model types for routing solutions.
//!
//! Provides routes as ordered sequences of visits with accumulated transit
//! costs, and the solution type wrapping routes with their objective value.

mod route;
mod solution;

pub use route::{Route, Visit};
pub use solution::Solution;
