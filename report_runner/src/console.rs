//! End-of-run console summary.

use std::fmt::Write as _;

use report_shared::render::format_duration;
use report_shared::result::{TestResult, TestStatus};
use report_shared::summary::TestSummary;

/// Formats the block printed once the run is over.
pub fn format_summary(summary: &TestSummary, results: &[TestResult]) -> String {
    let rule = "=".repeat(50);
    let mut out = String::new();

    let _ = writeln!(out, "\n🎯 TEST EXECUTION SUMMARY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Total Tests: {}", summary.total);
    let _ = writeln!(out, "Passed: {} ✅", summary.passed);
    let _ = writeln!(out, "Failed: {} ❌", summary.failed);
    let _ = writeln!(out, "Skipped: {} ⏭️", summary.skipped);
    let _ = writeln!(out, "Success Rate: {:.1}%", summary.success_rate);
    let _ = writeln!(out, "Total Duration: {}", format_duration(summary.duration_ms));
    let _ = writeln!(out, "{rule}");

    if summary.failed > 0 {
        let _ = writeln!(out, "\n🚨 FAILED TESTS:");
        for test in results.iter().filter(|t| t.status == TestStatus::Failed) {
            let _ = writeln!(out, "❌ {} ({})", test.name, test.category);
            if let Some(ref error) = test.error {
                let _ = writeln!(out, "   Error: {}", error);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use report_shared::summary::SummaryAggregator;

    use super::*;

    #[test]
    fn lists_failed_tests_with_errors() {
        let results = vec![
            TestResult::new("Homepage", "Functional").pass(1000),
            TestResult::new("Safari", "Cross-Browser").fail(2000, "flexbox"),
        ];
        let text = format_summary(&SummaryAggregator::compute(&results), &results);

        assert!(text.contains("Total Tests: 2"));
        assert!(text.contains("Success Rate: 50.0%"));
        assert!(text.contains("Total Duration: 3s"));
        assert!(text.contains("❌ Safari (Cross-Browser)"));
        assert!(text.contains("   Error: flexbox"));
        assert!(!text.contains("Homepage"));
    }

    #[test]
    fn clean_run_has_no_failure_section() {
        let results = vec![TestResult::new("a", "General").pass(1)];
        let text = format_summary(&SummaryAggregator::compute(&results), &results);
        assert!(!text.contains("FAILED TESTS"));
    }
}
