//! Thunk execution
//!
//! Runs one user-supplied computation and normalizes whatever it does into
//! an [`Outcome`]. Errors and panics never escape.

use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use crate::models::{Failure, IntoOutcome, Outcome};
use crate::utils::Timer;

/// Outcome and elapsed time of one thunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThunkOutput {
    pub outcome: Outcome,
    pub duration_ms: u64,
}

/// Drive `work` to completion, capturing returned errors and panics
pub async fn run_thunk<Fut>(label: &str, work: Fut) -> ThunkOutput
where
    Fut: Future,
    Fut::Output: IntoOutcome,
{
    let timer = Timer::start(label);

    let outcome = match AssertUnwindSafe(work).catch_unwind().await {
        Ok(value) => value.into_outcome(),
        Err(payload) => Outcome::Fail(Failure::from_panic(payload)),
    };

    ThunkOutput {
        outcome,
        duration_ms: timer.stop(),
    }
}
