//! Routing model façade.
//!
//! Ties the index manager, callback registry, and arc-cost evaluator
//! assignment together behind a single solve entry point.

mod routing;

pub use routing::RoutingModel;
