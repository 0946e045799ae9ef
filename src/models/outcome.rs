//! Leaf outcome models
//!
//! Defines the pass/fail outcome of a single test and the captured failure.

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed error accepted from user thunks and setup steps
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Where a captured failure came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The thunk returned an error value
    Error,
    /// The thunk panicked
    Panic,
    /// A group's setup step failed before any child ran
    Setup,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Error => write!(f, "error"),
            FailureKind::Panic => write!(f, "panic"),
            FailureKind::Setup => write!(f, "setup"),
        }
    }
}

/// A failure captured from a test thunk
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Failure {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    pub kind: FailureKind,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
            kind,
        }
    }

    /// Capture an error value, keeping its message and `source()` chain
    pub fn from_error(error: BoxError) -> Self {
        let mut causes = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: error.to_string(),
            causes,
            kind: FailureKind::Error,
        }
    }

    /// Capture a panic payload, rendering it as a string where possible
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        Self::new(FailureKind::Panic, message)
    }

    /// Re-tag a failure as coming from a setup step
    pub fn into_setup(mut self) -> Self {
        self.kind = FailureKind::Setup;
        self
    }
}

/// Outcome of a leaf test
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Outcome::Pass => "✔",
            Outcome::Fail(_) => "✖",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail(failure) => write!(f, "FAIL: {failure}"),
        }
    }
}

/// Return values a test thunk may produce
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Outcome::Pass
    }
}

impl<E> IntoOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Outcome {
        match self {
            Ok(()) => Outcome::Pass,
            Err(e) => Outcome::Fail(Failure::from_error(e.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("inner")]
    struct Inner;

    #[test]
    fn test_unit_is_pass() {
        assert_eq!(().into_outcome(), Outcome::Pass);
    }

    #[test]
    fn test_error_keeps_message() {
        let outcome = Err::<(), _>(std::io::Error::other("x")).into_outcome();
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.message, "x");
        assert_eq!(failure.kind, FailureKind::Error);
    }

    #[test]
    fn test_string_error_renders_value() {
        let outcome = Err::<(), _>("not an error type").into_outcome();
        assert_eq!(outcome.failure().unwrap().message, "not an error type");

        let outcome = Err::<(), _>(42.to_string()).into_outcome();
        assert_eq!(outcome.failure().unwrap().message, "42");
    }

    #[test]
    fn test_error_source_chain() {
        let failure = Failure::from_error(Box::new(Outer(Inner)));
        assert_eq!(failure.message, "outer");
        assert_eq!(failure.causes, vec!["inner".to_string()]);
    }

    #[test]
    fn test_panic_payloads() {
        assert_eq!(Failure::from_panic(Box::new("boom")).message, "boom");
        assert_eq!(
            Failure::from_panic(Box::new(String::from("owned"))).message,
            "owned"
        );
        let failure = Failure::from_panic(Box::new(7_u8));
        assert_eq!(failure.message, "Box<dyn Any>");
        assert_eq!(failure.kind, FailureKind::Panic);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Pass.to_string(), "PASS");
        let fail = Outcome::Fail(Failure::new(FailureKind::Error, "nope"));
        assert_eq!(fail.to_string(), "FAIL: nope");
    }
}
