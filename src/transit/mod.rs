//! Transit callbacks and their registry.
//!
//! Arc costs are supplied as user functions over routing indices,
//! registered once and referenced by opaque handle thereafter.

mod registry;

pub use registry::{CallbackHandle, Cost, TransitCallback, TransitCallbackRegistry, TransitFn};
