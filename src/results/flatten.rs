//! Flattening of result trees into leaf records

use crate::models::{LeafRecord, ResultKind, TestResult};

/// Flatten results depth-first into one record per leaf.
///
/// Each record carries the descriptions of every enclosing group followed by
/// its own. Groups never produce records themselves.
pub fn flatten(results: &[TestResult]) -> Vec<LeafRecord> {
    let mut records = Vec::new();
    flatten_into(results, &[], &mut records);
    records
}

fn flatten_into(results: &[TestResult], ancestors: &[String], records: &mut Vec<LeafRecord>) {
    for result in results {
        let mut chain = ancestors.to_vec();
        chain.push(result.description.clone());

        match &result.kind {
            ResultKind::Leaf(outcome) => records.push(LeafRecord {
                chain,
                duration_ms: result.duration_ms,
                outcome: outcome.clone(),
            }),
            ResultKind::Composite(children) => flatten_into(children, &chain, records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Failure, FailureKind, Outcome};

    #[test]
    fn test_nested_chain() {
        let tree = vec![TestResult::composite(
            "outer",
            0,
            vec![TestResult::composite(
                "inner",
                0,
                vec![TestResult::pass("t", 4)],
            )],
        )];

        let records = flatten(&tree);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].chain, ["outer", "inner", "t"]);
        assert_eq!(records[0].duration_ms, 4);
    }

    #[test]
    fn test_chain_length_is_depth_plus_one() {
        let tree = vec![
            TestResult::pass("top", 0),
            TestResult::composite(
                "a",
                0,
                vec![
                    TestResult::pass("depth one", 0),
                    TestResult::composite("b", 0, vec![TestResult::pass("depth two", 0)]),
                ],
            ),
        ];

        let lengths: Vec<_> = flatten(&tree).iter().map(|r| r.chain.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3]);
    }

    #[test]
    fn test_declaration_order_and_outcomes() {
        let failure = Failure::new(FailureKind::Error, "boom");
        let tree = vec![
            TestResult::pass("one", 0),
            TestResult::composite(
                "outer",
                0,
                vec![
                    TestResult::fail("two-errors", 0, failure.clone()),
                    TestResult::composite("skipped", 0, Vec::new()),
                ],
            ),
            TestResult::pass("four", 0),
        ];

        let records = flatten(&tree);
        let titles: Vec<_> = records.iter().map(LeafRecord::title).collect();
        assert_eq!(titles, vec!["one", "two-errors", "four"]);
        assert_eq!(records[1].ancestors(), ["outer"]);
        assert_eq!(records[1].outcome, Outcome::Fail(failure));
    }

    #[test]
    fn test_sibling_groups_do_not_share_chain() {
        let tree = vec![
            TestResult::composite("first", 0, vec![TestResult::pass("x", 0)]),
            TestResult::composite("second", 0, vec![TestResult::pass("y", 0)]),
        ];

        let records = flatten(&tree);
        assert_eq!(records[0].chain, ["first", "x"]);
        assert_eq!(records[1].chain, ["second", "y"]);
    }
}
