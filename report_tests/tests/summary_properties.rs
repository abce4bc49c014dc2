//! Aggregation properties checked over generated runs.

use proptest::prelude::*;
use report_shared::result::{TestPriority, TestResult, TestStatus};
use report_shared::summary::SummaryAggregator;

fn arb_status() -> impl Strategy<Value = TestStatus> {
    prop_oneof![
        Just(TestStatus::Passed),
        Just(TestStatus::Failed),
        Just(TestStatus::Skipped),
    ]
}

fn arb_category() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Functional"),
        Just("UI/UX"),
        Just("Responsive"),
        Just("Performance"),
        Just("General"),
    ]
}

fn arb_priority() -> impl Strategy<Value = TestPriority> {
    prop_oneof![
        Just(TestPriority::High),
        Just(TestPriority::Medium),
        Just(TestPriority::Low),
    ]
}

prop_compose! {
    fn arb_result()(
        name in "[a-z][a-z ]{2,20}",
        category in arb_category(),
        priority in arb_priority(),
        status in arb_status(),
        duration_ms in 0u64..600_000,
    ) -> TestResult {
        let base = TestResult::new(&name, category).with_priority(priority);
        match status {
            TestStatus::Passed => base.pass(duration_ms),
            TestStatus::Failed => base.fail(duration_ms, "assertion failed"),
            TestStatus::Skipped => base.skip(duration_ms),
        }
    }
}

fn arb_run(max: usize) -> impl Strategy<Value = Vec<TestResult>> {
    prop::collection::vec(arb_result(), 0..max)
}

/// Runs where every result shares one status.
fn arb_uniform_run() -> impl Strategy<Value = (TestStatus, Vec<TestResult>)> {
    (arb_status(), prop::collection::vec(arb_result(), 1..50)).prop_map(|(status, results)| {
        let results = results
            .into_iter()
            .map(|r| {
                let base = TestResult::new(&r.name, &r.category).with_priority(r.priority);
                match status {
                    TestStatus::Passed => base.pass(r.duration_ms),
                    TestStatus::Failed => base.fail(r.duration_ms, "assertion failed"),
                    TestStatus::Skipped => base.skip(r.duration_ms),
                }
            })
            .collect();
        (status, results)
    })
}

proptest! {
    #[test]
    fn counts_are_consistent(results in arb_run(200)) {
        let summary = SummaryAggregator::compute(&results);

        prop_assert_eq!(summary.total as usize, results.len());
        prop_assert_eq!(summary.passed + summary.failed + summary.skipped, summary.total);
        prop_assert_eq!(
            summary.duration_ms,
            results.iter().map(|r| r.duration_ms).sum::<u64>()
        );
    }

    #[test]
    fn success_rate_is_passed_over_total(results in arb_run(200)) {
        let summary = SummaryAggregator::compute(&results);
        let passed = results.iter().filter(|r| r.status == TestStatus::Passed).count();

        prop_assert!(!summary.success_rate.is_nan());
        if results.is_empty() {
            prop_assert_eq!(summary.success_rate, 0.0);
        } else {
            let expected = passed as f64 / results.len() as f64 * 100.0;
            prop_assert!((summary.success_rate - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn bucket_totals_sum_to_overall_total(results in arb_run(200)) {
        let summary = SummaryAggregator::compute(&results);

        let by_category: u32 = summary.categories.iter().map(|(_, s)| s.total).sum();
        let by_priority: u32 = summary.priorities.iter().map(|(_, s)| s.total).sum();
        prop_assert_eq!(by_category, summary.total);
        prop_assert_eq!(by_priority, summary.total);

        for (_, stats) in summary.categories.iter() {
            prop_assert_eq!(stats.passed + stats.failed + stats.skipped, stats.total);
        }
        for (_, stats) in summary.priorities.iter() {
            prop_assert_eq!(stats.passed + stats.failed + stats.skipped, stats.total);
        }
    }

    #[test]
    fn category_order_follows_first_appearance(results in arb_run(100)) {
        let summary = SummaryAggregator::compute(&results);

        let mut expected: Vec<&str> = Vec::new();
        for r in &results {
            if !expected.contains(&r.category.as_str()) {
                expected.push(&r.category);
            }
        }
        let actual: Vec<&str> = summary.categories.keys().map(String::as_str).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn compute_is_idempotent(results in arb_run(100)) {
        prop_assert_eq!(
            SummaryAggregator::compute(&results),
            SummaryAggregator::compute(&results)
        );
    }

    #[test]
    fn uniform_runs_land_in_one_column((status, results) in arb_uniform_run()) {
        let summary = SummaryAggregator::compute(&results);
        let n = results.len() as u32;

        match status {
            TestStatus::Passed => {
                prop_assert_eq!(summary.passed, n);
                prop_assert_eq!(summary.success_rate, 100.0);
            }
            TestStatus::Failed => {
                prop_assert_eq!(summary.failed, n);
                prop_assert_eq!(summary.success_rate, 0.0);
            }
            TestStatus::Skipped => {
                prop_assert_eq!(summary.skipped, n);
                prop_assert_eq!(summary.success_rate, 0.0);
            }
        }
    }
}
