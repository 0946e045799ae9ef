//! Leaf test declaration
//!
//! [`Test`] is the pending computation shared by leaf tests and groups.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::debug;

use super::thunk::run_thunk;
use crate::models::{IntoOutcome, TestResult};

/// A pending test or group that settles into a [`TestResult`] once awaited.
///
/// Work starts on first poll. Awaiting consumes the value, so a settled
/// computation can never run again.
#[must_use = "tests do nothing unless awaited or passed to a suite"]
pub struct Test {
    description: String,
    future: BoxFuture<'static, TestResult>,
}

impl Test {
    pub(crate) fn new(description: String, future: BoxFuture<'static, TestResult>) -> Self {
        Self {
            description,
            future,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Future for Test {
    type Output = TestResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(cx)
    }
}

impl fmt::Debug for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Test")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Declare a leaf test with an asynchronous thunk.
///
/// The thunk may return `()` or `Result<(), E>`; an `Err` or a panic makes the
/// test fail.
pub fn test<F, Fut>(description: impl Into<String>, thunk: F) -> Test
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future + Send + 'static,
    Fut::Output: IntoOutcome + Send + 'static,
{
    let description = description.into();
    let name = description.clone();

    let future = async move {
        let output = run_thunk(&name, async move { thunk().await }).await;
        debug!("{} settled: {} [{}ms]", name, output.outcome, output.duration_ms);
        TestResult::leaf(name, output.duration_ms, output.outcome)
    };

    Test::new(description, future.boxed())
}

/// Declare a leaf test with a synchronous thunk
pub fn test_sync<F, R>(description: impl Into<String>, thunk: F) -> Test
where
    F: FnOnce() -> R + Send + 'static,
    R: IntoOutcome + Send + 'static,
{
    test(description, move || async move { thunk() })
}
