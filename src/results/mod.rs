//! Result aggregation
//!
//! Counting and flattening of settled result trees.

mod aggregate;
mod flatten;

pub use aggregate::{count_failing, count_passing, count_total};
pub use flatten::flatten;
