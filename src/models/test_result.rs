//! Result tree models
//!
//! A settled test or group, and the shape of its outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::outcome::{Failure, Outcome};
use crate::results::{count_failing, count_passing, count_total};

/// Leaf outcome or ordered children of a group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Leaf(Outcome),
    Composite(Vec<TestResult>),
}

/// Settled result of a test or a group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub description: String,
    pub duration_ms: u64,
    pub kind: ResultKind,
}

impl TestResult {
    pub fn leaf(description: impl Into<String>, duration_ms: u64, outcome: Outcome) -> Self {
        Self {
            description: description.into(),
            duration_ms,
            kind: ResultKind::Leaf(outcome),
        }
    }

    pub fn pass(description: impl Into<String>, duration_ms: u64) -> Self {
        Self::leaf(description, duration_ms, Outcome::Pass)
    }

    pub fn fail(description: impl Into<String>, duration_ms: u64, failure: Failure) -> Self {
        Self::leaf(description, duration_ms, Outcome::Fail(failure))
    }

    pub fn composite(
        description: impl Into<String>,
        duration_ms: u64,
        children: Vec<TestResult>,
    ) -> Self {
        Self {
            description: description.into(),
            duration_ms,
            kind: ResultKind::Composite(children),
        }
    }

    /// Leaf outcome, or `None` for a group
    pub fn outcome(&self) -> Option<&Outcome> {
        match &self.kind {
            ResultKind::Leaf(outcome) => Some(outcome),
            ResultKind::Composite(_) => None,
        }
    }

    /// Children of a group, or `None` for a leaf
    pub fn children(&self) -> Option<&[TestResult]> {
        match &self.kind {
            ResultKind::Leaf(_) => None,
            ResultKind::Composite(children) => Some(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, ResultKind::Leaf(_))
    }

    pub fn passed(&self) -> usize {
        count_passing(std::slice::from_ref(self))
    }

    pub fn failed(&self) -> usize {
        count_failing(std::slice::from_ref(self))
    }

    pub fn total(&self) -> usize {
        count_total(std::slice::from_ref(self))
    }

    /// True when every leaf below this node passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ResultKind::Leaf(outcome) => write!(
                f,
                "{} {} [{}ms]",
                outcome.symbol(),
                self.description,
                self.duration_ms
            ),
            ResultKind::Composite(_) => write!(
                f,
                "{} {} ({}/{}) [{}ms]",
                if self.is_success() { "✔" } else { "✖" },
                self.description,
                self.passed(),
                self.total(),
                self.duration_ms
            ),
        }
    }
}
