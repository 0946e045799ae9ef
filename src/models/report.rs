//! Suite report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::outcome::Outcome;
use super::test_result::TestResult;
use crate::results::{count_failing, count_passing, flatten};

/// One leaf of a flattened result tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafRecord {
    /// Ancestor group descriptions followed by the leaf's own description
    pub chain: Vec<String>,
    pub duration_ms: u64,
    pub outcome: Outcome,
}

impl LeafRecord {
    pub fn title(&self) -> &str {
        self.chain.last().map(String::as_str).unwrap_or_default()
    }

    pub fn ancestors(&self) -> &[String] {
        match self.chain.split_last() {
            Some((_, ancestors)) => ancestors,
            None => &[],
        }
    }

    pub fn path(&self) -> String {
        self.chain.join(" > ")
    }
}

impl fmt::Display for LeafRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.outcome.symbol(),
            self.path(),
            self.duration_ms
        )
    }
}

/// Overall state of a finished suite
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteStatus {
    /// No tests were declared
    Empty,
    Passed,
    Failed,
}

/// Final artifact of a suite run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<TestResult>,
}

impl Report {
    pub fn new(started_at: DateTime<Utc>, duration_ms: u64, results: Vec<TestResult>) -> Self {
        Self {
            started_at,
            duration_ms,
            passed: count_passing(&results),
            failed: count_failing(&results),
            results,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn status(&self) -> SuiteStatus {
        if self.total() == 0 {
            SuiteStatus::Empty
        } else if self.failed > 0 {
            SuiteStatus::Failed
        } else {
            SuiteStatus::Passed
        }
    }

    /// Flattened leaf records in depth-first declaration order
    pub fn records(&self) -> Vec<LeafRecord> {
        flatten(&self.results)
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total() as f64) * 100.0
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            SuiteStatus::Empty => write!(f, "No tests found"),
            _ => write!(
                f,
                "{} passing, {} failing ({:.1}%) in {}ms",
                self.passed,
                self.failed,
                self.pass_rate(),
                self.duration_ms
            ),
        }
    }
}
