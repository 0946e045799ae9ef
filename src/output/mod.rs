//! Output formatting module
//!
//! Formatters and reporters for settled results.

mod formatter;
mod reporter;

pub use formatter::{write_report_to_file, OutputFormat, ResultFormatter};
pub use reporter::{reporter_for, ConsoleReporter, FlatReporter, NoopReporter, Reporter};
