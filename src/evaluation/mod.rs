//! Route pricing.
//!
//! Turns a visit order into a fully costed route by walking the registered
//! transit callback over consecutive arcs.

mod evaluator;

pub use evaluator::RouteEvaluator;
