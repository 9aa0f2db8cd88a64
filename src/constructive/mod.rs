//! First-solution construction heuristics.
//!
//! - [`path_cheapest_arc`] — Greedy cheapest-arc extension, O(n²)
//! - [`RouteBuilder`] — Stateful wrapper dispatching on the configured
//!   first-solution strategy

mod path_cheapest_arc;

pub use path_cheapest_arc::{path_cheapest_arc, BuilderState, RouteBuilder};
