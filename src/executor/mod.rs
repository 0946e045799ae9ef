//! Test execution engine
//!
//! Leaf tests, groups and suites. Every computation is a [`Test`] that
//! settles into a [`TestResult`](crate::models::TestResult).

mod group;
mod leaf;
mod suite;
mod thunk;

pub use group::{group, GroupBuilder, SetupGroup, FACTORY_FAILURE, SETUP_FAILURE};
pub use leaf::{test, test_sync, Test};
pub use suite::{suite, SuiteConfig, SuiteRunner};
pub use thunk::{run_thunk, ThunkOutput};
