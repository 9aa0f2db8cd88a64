//! Transit cost matrices.
//!
//! Provides a dense integer cost matrix for routing problems whose arc
//! costs are tabular rather than computed.

mod matrix;

pub use matrix::TransitMatrix;
