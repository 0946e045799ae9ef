//! Recursive pass/fail aggregation over result trees
//!
//! Only leaves are counted; groups contribute their descendants.

use crate::models::{Outcome, ResultKind, TestResult};

/// Number of passing leaves
pub fn count_passing(results: &[TestResult]) -> usize {
    count_leaves(results, &|outcome| outcome.is_pass())
}

/// Number of failing leaves
pub fn count_failing(results: &[TestResult]) -> usize {
    count_leaves(results, &|outcome| !outcome.is_pass())
}

/// Number of leaves
pub fn count_total(results: &[TestResult]) -> usize {
    count_leaves(results, &|_| true)
}

fn count_leaves(results: &[TestResult], matches: &dyn Fn(&Outcome) -> bool) -> usize {
    results
        .iter()
        .map(|result| match &result.kind {
            ResultKind::Leaf(outcome) => usize::from(matches(outcome)),
            ResultKind::Composite(children) => count_leaves(children, matches),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Failure, FailureKind};

    fn fail(description: &str) -> TestResult {
        TestResult::fail(
            description,
            0,
            Failure::new(FailureKind::Error, description),
        )
    }

    fn deep_tree() -> Vec<TestResult> {
        vec![
            TestResult::pass("one", 0),
            fail("one-errors"),
            TestResult::composite(
                "outer",
                0,
                vec![
                    TestResult::pass("two", 0),
                    fail("two-errors"),
                    TestResult::composite(
                        "inner",
                        0,
                        vec![TestResult::pass("three", 0), fail("three-errors")],
                    ),
                ],
            ),
            TestResult::composite("empty", 0, Vec::new()),
        ]
    }

    #[test]
    fn test_counts_across_nesting() {
        let tree = deep_tree();
        assert_eq!(count_passing(&tree), 3);
        assert_eq!(count_failing(&tree), 3);
        assert_eq!(count_total(&tree), 6);
    }

    #[test]
    fn test_passing_plus_failing_is_total() {
        let tree = deep_tree();
        for node in &tree {
            let single = std::slice::from_ref(node);
            assert_eq!(
                count_passing(single) + count_failing(single),
                count_total(single)
            );
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(count_total(&[]), 0);
        let empty = [TestResult::composite("nothing", 0, Vec::new())];
        assert_eq!(count_passing(&empty), 0);
        assert_eq!(count_failing(&empty), 0);
    }

    #[test]
    fn test_order_independent() {
        let mut tree = deep_tree();
        tree.reverse();
        assert_eq!(count_passing(&tree), 3);
        assert_eq!(count_failing(&tree), 3);
    }
}
