//! Group execution
//!
//! A group runs an optional setup step once, hands the resulting variables to
//! a factory that declares its children, then awaits every child
//! concurrently. Children settle in any order but are reported in the order
//! the factory returned them.

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use std::convert::Infallible;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use super::leaf::Test;
use crate::models::{BoxError, Failure, TestResult};
use crate::utils::Timer;

/// Description of the synthetic leaf reported when setup fails
pub const SETUP_FAILURE: &str = "setup";

/// Description of the synthetic leaf reported when the child factory panics
pub const FACTORY_FAILURE: &str = "assert";

/// Declare a named group of tests
pub fn group(description: impl Into<String>) -> GroupBuilder {
    GroupBuilder {
        description: description.into(),
    }
}

/// A group without setup
#[derive(Debug)]
#[must_use = "a group does nothing until `assert` is called"]
pub struct GroupBuilder {
    description: String,
}

impl GroupBuilder {
    /// Attach an infallible, possibly asynchronous setup step
    pub fn setup<F, Fut, V>(self, setup: F) -> SetupGroup<V>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = V> + Send + 'static,
        V: Send + 'static,
    {
        self.try_setup(move || async move { Ok::<V, Infallible>(setup().await) })
    }

    /// Attach an infallible synchronous setup step
    pub fn setup_sync<F, V>(self, setup: F) -> SetupGroup<V>
    where
        F: FnOnce() -> V + Send + 'static,
        V: Send + 'static,
    {
        self.setup(move || async move { setup() })
    }

    /// Attach a setup step that may fail.
    ///
    /// When it fails the factory is never called and the group settles with a
    /// single failing leaf named [`SETUP_FAILURE`].
    pub fn try_setup<F, Fut, V, E>(self, setup: F) -> SetupGroup<V>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        V: Send + 'static,
        E: Into<BoxError> + Send + 'static,
    {
        let setup = async move {
            match AssertUnwindSafe(async move { setup().await })
                .catch_unwind()
                .await
            {
                Ok(Ok(variables)) => Ok(variables),
                Ok(Err(e)) => Err(Failure::from_error(e.into()).into_setup()),
                Err(payload) => Err(Failure::from_panic(payload).into_setup()),
            }
        };

        SetupGroup {
            description: self.description,
            setup: setup.boxed(),
        }
    }

    /// Declare the children; the factory receives no variables
    pub fn assert<F>(self, factory: F) -> Test
    where
        F: FnOnce(()) -> Vec<Test> + Send + 'static,
    {
        run_group(self.description, async { Ok::<(), Failure>(()) }.boxed(), factory)
    }
}

/// A group whose children receive variables produced by setup
#[must_use = "a group does nothing until `assert` is called"]
pub struct SetupGroup<V> {
    description: String,
    setup: BoxFuture<'static, Result<V, Failure>>,
}

impl<V: Send + 'static> SetupGroup<V> {
    /// Declare the children from the setup variables
    pub fn assert<F>(self, factory: F) -> Test
    where
        F: FnOnce(V) -> Vec<Test> + Send + 'static,
    {
        run_group(self.description, self.setup, factory)
    }
}

fn run_group<V, F>(
    description: String,
    setup: BoxFuture<'static, Result<V, Failure>>,
    factory: F,
) -> Test
where
    V: Send + 'static,
    F: FnOnce(V) -> Vec<Test> + Send + 'static,
{
    let name = description.clone();

    let future = async move {
        let timer = Timer::start(&name);

        let children = match setup.await {
            Ok(variables) => match panic::catch_unwind(AssertUnwindSafe(|| factory(variables))) {
                Ok(tests) => join_all(tests).await,
                Err(payload) => {
                    let failure = Failure::from_panic(payload).into_setup();
                    warn!("Child factory of {} panicked: {}", name, failure);
                    vec![TestResult::fail(FACTORY_FAILURE, timer.elapsed_ms(), failure)]
                }
            },
            Err(failure) => {
                warn!("Setup of {} failed: {}", name, failure);
                vec![TestResult::fail(SETUP_FAILURE, timer.elapsed_ms(), failure)]
            }
        };

        let duration_ms = timer.stop();
        debug!(
            "{} settled: {} children [{}ms]",
            name,
            children.len(),
            duration_ms
        );

        TestResult::composite(name, duration_ms, children)
    };

    Test::new(description, future.boxed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::{test, test_sync};
    use crate::models::{FailureKind, Outcome, ResultKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn descriptions(result: &TestResult) -> Vec<&str> {
        result
            .children()
            .unwrap()
            .iter()
            .map(|r| r.description.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_block_of_only_tests() {
        let block = group("some tests")
            .assert(|_| {
                vec![
                    test_sync("passes, yay", || {}),
                    test_sync("fails, boo", || Err::<(), _>("boo")),
                ]
            })
            .await;

        assert_eq!(block.description, "some tests");
        assert_eq!(descriptions(&block), vec!["passes, yay", "fails, boo"]);
        assert_eq!(block.passed(), 1);
        assert_eq!(block.failed(), 1);
    }

    #[tokio::test]
    async fn test_deeply_nested_block() {
        let block = group("some tests")
            .assert(|_| {
                vec![
                    test_sync("passes, yay", || {}),
                    group("with nested tests").assert(|_| {
                        vec![
                            test_sync("passes, yay", || {}),
                            group("with even more nested tests").assert(|_| {
                                vec![
                                    test_sync("passes, yay", || {}),
                                    test_sync("fails, boo", || Err::<(), _>("boo")),
                                ]
                            }),
                        ]
                    }),
                ]
            })
            .await;

        assert_eq!(block.total(), 4);
        assert_eq!(block.failed(), 1);
        let nested = &block.children().unwrap()[1];
        assert!(matches!(nested.kind, ResultKind::Composite(_)));
        assert_eq!(
            descriptions(nested),
            vec!["passes, yay", "with even more nested tests"]
        );
    }

    #[tokio::test]
    async fn test_setup_variables_are_injected() {
        let block = group("some tests")
            .setup(|| async { String::from("expected") })
            .assert(|thing| {
                let other = thing.clone();
                vec![
                    test_sync("passes, yay", move || {
                        assert_eq!(thing, "expected");
                    }),
                    test_sync("fails, boo", move || {
                        assert_eq!(other, "something else");
                    }),
                ]
            })
            .await;

        assert_eq!(block.passed(), 1);
        assert_eq!(block.failed(), 1);
    }

    #[tokio::test]
    async fn test_setup_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let block = group("once")
            .setup(move || async move { counter.fetch_add(1, Ordering::SeqCst) })
            .assert(|_| {
                vec![
                    test_sync("a", || {}),
                    test_sync("b", || {}),
                    test_sync("c", || {}),
                ]
            })
            .await;

        assert_eq!(block.passed(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_order_follows_declaration() {
        let block = group("ordering")
            .assert(|_| {
                vec![
                    test("slow", || async {
                        tokio::time::sleep(Duration::from_millis(50)).await;
                    }),
                    test_sync("fast", || {}),
                ]
            })
            .await;

        assert_eq!(descriptions(&block), vec!["slow", "fast"]);
        assert!(block.duration_ms >= 50);
    }

    #[tokio::test]
    async fn test_children_run_concurrently() {
        let block = group("concurrent")
            .assert(|_| {
                (0..4)
                    .map(|i| {
                        test(format!("sleeper {i}"), || async {
                            tokio::time::sleep(Duration::from_millis(40)).await;
                        })
                    })
                    .collect()
            })
            .await;

        assert_eq!(block.passed(), 4);
        assert!(block.duration_ms < 150);
    }

    #[tokio::test]
    async fn test_setup_resolves_before_factory() {
        let timer = Timer::start("setup");
        let factory_at = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&factory_at);

        let block = group("slow setup")
            .setup(|| async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                String::from("ready")
            })
            .assert(move |state| {
                seen.store(timer.elapsed_ms() as usize, Ordering::SeqCst);
                vec![test_sync("sees state", move || {
                    if state != "ready" {
                        return Err("setup value missing");
                    }
                    Ok(())
                })]
            })
            .await;

        assert!(factory_at.load(Ordering::SeqCst) >= 50);
        assert!(block.duration_ms >= 50);
        assert_eq!(block.passed(), 1);
    }

    #[tokio::test]
    async fn test_sync_setup() {
        let block = group("sync setup")
            .setup_sync(|| 21)
            .assert(|n| vec![test_sync("doubles", move || assert_eq!(n * 2, 42))])
            .await;

        assert_eq!(block.passed(), 1);
        assert_eq!(block.failed(), 0);
    }

    #[tokio::test]
    async fn test_empty_group() {
        let block = group("nothing").assert(|_| Vec::new()).await;
        assert_eq!(block.children().map(<[TestResult]>::len), Some(0));
        assert_eq!(block.total(), 0);
    }

    #[tokio::test]
    async fn test_failing_setup_yields_synthetic_leaf() {
        let factory_called = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&factory_called);

        let block = group("broken")
            .try_setup(|| async { Err::<String, _>("database unavailable") })
            .assert(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                vec![test_sync("never runs", || {})]
            })
            .await;

        assert_eq!(factory_called.load(Ordering::SeqCst), 0);
        assert_eq!(descriptions(&block), vec![SETUP_FAILURE]);
        let failure = block.children().unwrap()[0]
            .outcome()
            .and_then(Outcome::failure)
            .unwrap();
        assert_eq!(failure.kind, FailureKind::Setup);
        assert_eq!(failure.message, "database unavailable");
    }

    #[tokio::test]
    async fn test_panicking_setup_yields_synthetic_leaf() {
        let block = group("broken")
            .setup(|| async { panic!("no fixtures") })
            .assert(|(): ()| vec![test_sync("never runs", || {})])
            .await;

        assert_eq!(block.failed(), 1);
        assert_eq!(descriptions(&block), vec![SETUP_FAILURE]);
    }

    #[tokio::test]
    async fn test_panicking_factory_yields_synthetic_leaf() {
        let block = group("broken")
            .assert(|_| -> Vec<Test> { panic!("bad factory") })
            .await;

        assert_eq!(block.failed(), 1);
        assert_eq!(descriptions(&block), vec![FACTORY_FAILURE]);
    }
}
