//! Routing index space.
//!
//! Solver internals address locations through routing indices rather than
//! node identities, so that each vehicle can own distinct start and end
//! positions even when they share a physical depot.

mod manager;

pub use manager::{RoutingIndex, RoutingIndexManager};
