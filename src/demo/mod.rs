//! Bundled demonstration suites
//!
//! Used by the `run` command to show the engine and reporters in action.

use std::time::Duration;

use crate::executor::{group, test, test_sync, Test};

/// Which bundled suite to run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoSuite {
    /// Mixed passing and failing tests, nested groups with setup
    Showcase,
    /// Only passing tests
    Passing,
}

impl DemoSuite {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "showcase" => Some(DemoSuite::Showcase),
            "passing" => Some(DemoSuite::Passing),
            _ => None,
        }
    }

    pub fn tests(&self) -> Vec<Test> {
        match self {
            DemoSuite::Showcase => showcase(),
            DemoSuite::Passing => passing(),
        }
    }
}

/// Tests that exercise every kind of declaration, including failures
pub fn showcase() -> Vec<Test> {
    vec![
        test_sync("can include sync tests", || {
            let words: Vec<_> = "sync tests".split(' ').collect();
            assert_eq!(words.len(), 2);
        }),
        test("can include async tests", || async {
            let value = async { true }.await;
            assert!(value);
        }),
        test_sync("might sometimes fail!", || {
            Err::<(), _>("expected true to be truthy, got false")
        }),
        group("collections of tests")
            .setup(|| async { String::from("blep") })
            .assert(|my_variable| {
                let outer = my_variable.clone();
                vec![
                    test_sync("can use the prepared variables", move || {
                        assert!(!my_variable.is_empty());
                    }),
                    group("nested collections")
                        .setup(|| async {
                            tokio::time::sleep(Duration::from_millis(5)).await;
                            String::from("mlep")
                        })
                        .assert(move |my_async_variable| {
                            let inner = outer.clone();
                            let async_inner = my_async_variable.clone();
                            vec![
                                test_sync("can still use variables from the outer scope", move || {
                                    assert_ne!(my_async_variable, outer);
                                }),
                                test_sync("might also fail all the way in here...", move || {
                                    assert_eq!(async_inner, inner, "variables differ");
                                }),
                            ]
                        }),
                ]
            }),
    ]
}

/// Sync, async and deeply nested tests that all pass
pub fn passing() -> Vec<Test> {
    vec![
        group("sync").assert(|_| vec![test_sync("one", || {}), test_sync("two", || {})]),
        group("async").assert(|_| {
            vec![
                test("one", || async {}),
                test("two", || async {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }),
            ]
        }),
        group("deeply").assert(|_| {
            vec![group("nested").assert(|_| {
                vec![test("one", || async {}), test("two", || async {})]
            })]
        }),
    ]
}
