//! Local search operators for improving constructed routes.
//!
//! - [`two_opt_improve`] — Intra-route 2-opt edge reversal

mod two_opt;

pub use two_opt::two_opt_improve;
