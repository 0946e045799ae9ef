//! pico-spec - minimal hierarchical test declaration and execution engine
//!
//! Declare leaf tests and nested groups, run them concurrently, and get back a
//! recursively structured [`Report`].
//!
//! ```no_run
//! use pico_spec::{group, suite, test, test_sync};
//!
//! # async fn demo() {
//! let report = suite(vec![
//!     test_sync("passes", || {}),
//!     test("fails", || async { Err::<(), _>("x") }),
//!     group("outer")
//!         .setup(|| async { String::from("expected") })
//!         .assert(|thing| {
//!             vec![test_sync("uses setup", move || assert_eq!(thing, "expected"))]
//!         }),
//! ])
//! .await;
//!
//! assert_eq!((report.passed, report.failed), (2, 1));
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`executor`]: leaf tests, groups and the suite runner
//! - [`models`]: outcomes, result trees and reports
//! - [`results`]: recursive counting and flattening
//! - [`output`]: formatters and pluggable reporters
//! - [`config`]: file and environment configuration

pub mod config;
pub mod demo;
pub mod executor;
pub mod models;
pub mod output;
pub mod results;
pub mod utils;

pub use executor::{group, suite, test, test_sync, SuiteConfig, SuiteRunner, Test};
pub use models::{Failure, FailureKind, LeafRecord, Outcome, Report, SuiteStatus, TestResult};
pub use output::{NoopReporter, Reporter};
pub use results::{count_failing, count_passing, count_total, flatten};
