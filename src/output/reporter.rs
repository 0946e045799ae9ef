//! Reporters
//!
//! Consumers of settled results. The suite runner calls a reporter once per
//! top-level result and once when the whole suite is done.

use std::sync::Arc;

use crate::models::{Report, SuiteStatus, TestResult};
use crate::results::flatten;

use super::formatter::{OutputFormat, ResultFormatter};

/// Receives settled results from a suite run
pub trait Reporter: Send + Sync {
    /// Called once per top-level result, as it settles
    fn on_result(&self, result: &TestResult);

    /// Called once with the final report
    fn on_done(&self, _report: &Report) {}
}

impl<F> Reporter for F
where
    F: Fn(&TestResult) + Send + Sync,
{
    fn on_result(&self, result: &TestResult) {
        self(result)
    }
}

/// Reporter that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn on_result(&self, _result: &TestResult) {}
}

/// Prints each top-level result as an indented tree
#[derive(Clone, Debug)]
pub struct ConsoleReporter {
    formatter: ResultFormatter,
}

impl ConsoleReporter {
    pub fn new(colorize: bool) -> Self {
        Self {
            formatter: ResultFormatter::new(OutputFormat::Tree).with_color(colorize),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn on_result(&self, result: &TestResult) {
        let output = self.formatter.format_result(result);
        if result.is_success() {
            print!("{output}");
        } else {
            eprint!("{output}");
        }
    }

    fn on_done(&self, report: &Report) {
        print_footer(&self.formatter, report);
    }
}

/// Prints one line per leaf with its full description chain
#[derive(Clone, Debug)]
pub struct FlatReporter {
    formatter: ResultFormatter,
}

impl FlatReporter {
    pub fn new(colorize: bool) -> Self {
        Self {
            formatter: ResultFormatter::new(OutputFormat::Flat).with_color(colorize),
        }
    }
}

impl Default for FlatReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for FlatReporter {
    fn on_result(&self, result: &TestResult) {
        for record in flatten(std::slice::from_ref(result)) {
            let output = self.formatter.format_record(&record);
            if record.outcome.is_pass() {
                print!("{output}");
            } else {
                eprint!("{output}");
            }
        }
    }

    fn on_done(&self, report: &Report) {
        print_footer(&self.formatter, report);
    }
}

fn print_footer(formatter: &ResultFormatter, report: &Report) {
    let footer = formatter.format_footer(report);
    match report.status() {
        SuiteStatus::Passed => println!("\n{footer}"),
        SuiteStatus::Empty | SuiteStatus::Failed => eprintln!("\n{footer}"),
    }
}

/// Pick the reporter matching an output format
pub fn reporter_for(format: OutputFormat, colorize: bool) -> Arc<dyn Reporter> {
    match format {
        OutputFormat::Tree => Arc::new(ConsoleReporter::new(colorize)),
        OutputFormat::Flat => Arc::new(FlatReporter::new(colorize)),
        _ => Arc::new(NoopReporter),
    }
}
