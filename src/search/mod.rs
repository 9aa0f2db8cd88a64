//! Search configuration.
//!
//! Selects the first-solution strategy and any improvement pass applied to
//! the constructed routes.

mod parameters;

pub use parameters::{FirstSolutionStrategy, LocalSearch, SearchParameters};
