//! Data models for test results
//!
//! Outcomes, result trees, flattened records and suite reports.

mod outcome;
mod report;
mod test_result;

pub use outcome::{BoxError, Failure, FailureKind, IntoOutcome, Outcome};
pub use report::{LeafRecord, Report, SuiteStatus};
pub use test_result::{ResultKind, TestResult};
