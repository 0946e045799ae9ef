//! Suite execution
//!
//! Runs top-level tests and groups concurrently and folds them into a
//! [`Report`].

use chrono::Utc;
use futures::future::join_all;
use futures::FutureExt;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

use super::leaf::Test;
use crate::models::{Report, SuiteStatus};
use crate::output::{ConsoleReporter, Reporter};
use crate::utils::Timer;

/// Per-run suite configuration
#[derive(Clone)]
pub struct SuiteConfig {
    /// Whether the logger is invoked at all
    pub log: bool,
    /// Receives each top-level result as it settles
    pub logger: Arc<dyn Reporter>,
}

impl SuiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn with_logger(mut self, logger: impl Reporter + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    pub fn with_shared_logger(mut self, logger: Arc<dyn Reporter>) -> Self {
        self.logger = logger;
        self
    }

    /// Disable reporting entirely
    pub fn quiet(self) -> Self {
        self.with_log(false)
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            log: true,
            logger: Arc::new(ConsoleReporter::default()),
        }
    }
}

impl fmt::Debug for SuiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuiteConfig")
            .field("log", &self.log)
            .finish_non_exhaustive()
    }
}

/// Runs a list of top-level computations to completion
#[derive(Clone, Debug, Default)]
pub struct SuiteRunner {
    config: SuiteConfig,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self { config }
    }

    /// Await every computation and build the report.
    ///
    /// Failures never short-circuit; every computation runs and is included.
    pub async fn run(&self, tests: impl IntoIterator<Item = Test>) -> Report {
        let started_at = Utc::now();
        let timer = Timer::start("suite");
        let log = self.config.log;

        let pending: Vec<_> = tests
            .into_iter()
            .map(|test| {
                let logger = Arc::clone(&self.config.logger);
                test.inspect(move |result| {
                    if log {
                        logger.on_result(result);
                    }
                })
            })
            .collect();

        info!("Running suite of {} top-level tests", pending.len());
        let results = join_all(pending).await;
        let report = Report::new(started_at, timer.stop(), results);

        match report.status() {
            SuiteStatus::Empty => warn!("No tests found"),
            _ => info!(
                "Suite completed in {}ms - Pass: {}/{} ({:.1}%)",
                report.duration_ms,
                report.passed,
                report.total(),
                report.pass_rate()
            ),
        }

        if log {
            self.config.logger.on_done(&report);
        }

        report
    }
}

/// Run tests with the default configuration
pub async fn suite(tests: impl IntoIterator<Item = Test>) -> Report {
    SuiteRunner::default().run(tests).await
}
