//! Output formatters for test results
//!
//! Provides tree, flat, JSON, CSV and summary output formats.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::{Failure, LeafRecord, Outcome, Report, ResultKind, SuiteStatus, TestResult};
use crate::results::flatten;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const GREY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Flat,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Some(OutputFormat::Tree),
            "flat" => Some(OutputFormat::Flat),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Flat => "flat",
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Csv => "csv",
            OutputFormat::Summary => "summary",
        }
    }

    /// Human-readable formats that are printed as results settle
    pub fn is_streaming(&self) -> bool {
        matches!(self, OutputFormat::Tree | OutputFormat::Flat)
    }
}

/// Result formatter
#[derive(Clone, Debug)]
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    pub fn with_color(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colorize {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Format one settled top-level result
    pub fn format_result(&self, result: &TestResult) -> String {
        match self.format {
            OutputFormat::Tree => self.format_tree(result),
            OutputFormat::Flat => self.format_records(&flatten(std::slice::from_ref(result))),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self
                .records_csv(&flatten(std::slice::from_ref(result)))
                .unwrap_or_default(),
            OutputFormat::Summary => result.to_string(),
        }
    }

    /// Format a whole report
    pub fn format_report(&self, report: &Report) -> String {
        match self.format {
            OutputFormat::Tree => {
                let mut output = String::new();
                for result in &report.results {
                    output.push_str(&self.format_tree(result));
                }
                output.push('\n');
                output.push_str(&self.format_footer(report));
                output
            }
            OutputFormat::Flat => {
                let mut output = self.format_records(&report.records());
                output.push('\n');
                output.push_str(&self.format_footer(report));
                output
            }
            OutputFormat::Json => serde_json::to_string(report).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(report).unwrap_or_default(),
            OutputFormat::Csv => self.records_csv(&report.records()).unwrap_or_default(),
            OutputFormat::Summary => report.to_string(),
        }
    }

    /// Closing line of a report
    pub fn format_footer(&self, report: &Report) -> String {
        match report.status() {
            SuiteStatus::Empty => self.paint(YELLOW, "⚠ No tests found"),
            SuiteStatus::Failed => self.paint(
                RED,
                &format!(
                    "{} passing, {} failing ({}ms)",
                    report.passed, report.failed, report.duration_ms
                ),
            ),
            SuiteStatus::Passed => self.paint(
                GREEN,
                &format!(
                    "All {} tests passed ({}ms)",
                    report.passed, report.duration_ms
                ),
            ),
        }
    }

    /// Indented tree, one line per node
    pub fn format_tree(&self, result: &TestResult) -> String {
        let mut output = String::new();
        self.write_tree(result, 0, &mut output);
        output
    }

    fn write_tree(&self, result: &TestResult, depth: usize, output: &mut String) {
        let indent = "  ".repeat(depth);
        let duration = self.paint(GREY, &format!("{}ms", result.duration_ms));

        match &result.kind {
            ResultKind::Leaf(outcome) => {
                let color = if outcome.is_pass() { GREEN } else { RED };
                let label = format!("{} {}", outcome.symbol(), result.description);
                output.push_str(&format!("{indent}{} {duration}\n", self.paint(color, &label)));

                if let Outcome::Fail(failure) = outcome {
                    output.push_str(&self.failure_lines(failure, &format!("{indent}    ")));
                }
            }
            ResultKind::Composite(children) => {
                let (passed, total) = (result.passed(), result.total());
                let label = if passed == total {
                    self.paint(GREEN, &format!("✔ {} ({passed})", result.description))
                } else {
                    self.paint(RED, &format!("✖ {} ({passed}/{total})", result.description))
                };
                output.push_str(&format!("{indent}{label} {duration}\n"));

                for child in children {
                    self.write_tree(child, depth + 1, output);
                }
            }
        }
    }

    /// One line per leaf, failures followed by their message
    pub fn format_records(&self, records: &[LeafRecord]) -> String {
        let mut output = String::new();
        for record in records {
            output.push_str(&self.format_record(record));
        }
        output
    }

    pub fn format_record(&self, record: &LeafRecord) -> String {
        let label = format!("{} {}", record.outcome.symbol(), record.path());
        match &record.outcome {
            Outcome::Pass => format!("{}\n", self.paint(GREEN, &label)),
            Outcome::Fail(failure) => format!(
                "{}\n\n{}\n",
                self.paint(RED, &label),
                self.failure_lines(failure, "    ")
            ),
        }
    }

    fn failure_lines(&self, failure: &Failure, indent: &str) -> String {
        let mut output = String::new();
        for line in failure.message.lines() {
            output.push_str(&format!("{indent}{line}\n"));
        }
        for cause in &failure.causes {
            output.push_str(&format!("{indent}caused by: {cause}\n"));
        }
        output
    }

    fn records_csv(&self, records: &[LeafRecord]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["path", "status", "duration_ms", "message"])?;

        for record in records {
            let (status, message) = match &record.outcome {
                Outcome::Pass => ("pass", String::new()),
                Outcome::Fail(failure) => ("fail", failure.message.clone()),
            };
            writer.write_record([
                record.path(),
                status.to_string(),
                record.duration_ms.to_string(),
                message,
            ])?;
        }

        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Tree)
    }
}

/// Write a report to a file, without colors
pub fn write_report_to_file(
    path: impl AsRef<Path>,
    report: &Report,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let formatter = ResultFormatter::new(format).no_color();
    let content = formatter.format_report(report);

    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write report file: {}", path.display()))?;

    Ok(())
}
