//! Markdown executive summary.

use std::fmt;
use std::fmt::Write as _;

use crate::result::{TestPriority, TestResult, TestStatus};
use crate::summary::TestSummary;

use super::{display_time, format_duration, ReportRenderer};

/// Runs longer than this get an optimization recommendation.
pub const SLOW_RUN_THRESHOLD_MS: u64 = 300_000;

/// Qualitative band for a run's success rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Assessment {
    pub fn from_success_rate(rate: f64) -> Self {
        if rate >= 95.0 {
            Assessment::Excellent
        } else if rate >= 85.0 {
            Assessment::Good
        } else if rate >= 70.0 {
            Assessment::Fair
        } else {
            Assessment::Poor
        }
    }

    fn banner(&self) -> &'static str {
        match self {
            Assessment::Excellent => {
                "🟢 **EXCELLENT** - The website is performing exceptionally well with minimal issues."
            }
            Assessment::Good => {
                "🟡 **GOOD** - The website is generally working well with some minor issues to address."
            }
            Assessment::Fair => {
                "🟠 **FAIR** - The website has several issues that need attention before launch."
            }
            Assessment::Poor => {
                "🔴 **POOR** - The website has significant issues that require immediate attention."
            }
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.banner())
    }
}

/// One rule-derived recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    AddressFailures,
    ReviewFailedTests,
    CompleteSkippedTests,
    OptimizeSlowTests,
    ReadyForProduction,
}

impl Recommendation {
    /// Applies the fixed rules in order. `ReadyForProduction` only appears
    /// when nothing else does.
    pub fn for_summary(summary: &TestSummary) -> Vec<Recommendation> {
        let mut out = Vec::new();
        if summary.success_rate < 95.0 {
            out.push(Recommendation::AddressFailures);
        }
        if summary.failed > 0 {
            out.push(Recommendation::ReviewFailedTests);
        }
        if summary.skipped > 0 {
            out.push(Recommendation::CompleteSkippedTests);
        }
        if summary.duration_ms > SLOW_RUN_THRESHOLD_MS {
            out.push(Recommendation::OptimizeSlowTests);
        }
        if out.is_empty() {
            out.push(Recommendation::ReadyForProduction);
        }
        out
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::AddressFailures => {
                "🔧 **Immediate Action Required:** Address failed tests before production deployment"
            }
            Recommendation::ReviewFailedTests => {
                "📋 **Review Failed Tests:** Investigate and fix all failed test cases"
            }
            Recommendation::CompleteSkippedTests => {
                "⏭️ **Complete Skipped Tests:** Run skipped tests to ensure full coverage"
            }
            Recommendation::OptimizeSlowTests => {
                "⚡ **Performance Optimization:** Consider optimizing slow-running tests"
            }
            Recommendation::ReadyForProduction => {
                "✅ **Ready for Production:** All tests passing, website is ready for launch"
            }
        };
        f.write_str(text)
    }
}

impl ReportRenderer {
    /// Renders the executive summary as Markdown.
    pub fn render_executive_summary(&self, summary: &TestSummary, results: &[TestResult]) -> String {
        let mut md = String::new();

        let _ = writeln!(md, "# {} - Executive Summary", self.metadata.project);
        md.push('\n');
        md.push_str("## 📊 Key Metrics\n");
        let _ = writeln!(md, "- **Total Tests Executed:** {}", summary.total);
        let _ = writeln!(md, "- **Success Rate:** {:.1}%", summary.success_rate);
        let _ = writeln!(md, "- **Tests Passed:** {}", summary.passed);
        let _ = writeln!(md, "- **Tests Failed:** {}", summary.failed);
        let _ = writeln!(md, "- **Tests Skipped:** {}", summary.skipped);
        let _ = writeln!(md, "- **Total Duration:** {}", format_duration(summary.duration_ms));

        md.push_str("\n## 🎯 Overall Assessment\n");
        let _ = writeln!(md, "{}", Assessment::from_success_rate(summary.success_rate));

        md.push_str("\n## 🚨 Critical Issues\n");
        md.push_str(&critical_issues(results));

        md.push_str("\n## ✅ What's Working Well\n");
        md.push_str(&working_categories(results));

        md.push_str("\n## 📋 Recommendations\n");
        for rec in Recommendation::for_summary(summary) {
            let _ = writeln!(md, "{rec}");
        }

        md.push_str("\n## 📈 Category Performance\n");
        for (category, stats) in summary.categories.iter() {
            let _ = writeln!(
                md,
                "- **{}:** {}/{} passed ({:.1}%)",
                category,
                stats.passed,
                stats.total,
                stats.pass_rate()
            );
        }

        md.push_str("\n---\n");
        let _ = writeln!(md, "*Report generated on {}*", display_time(self.generated_at));
        md
    }
}

fn critical_issues(results: &[TestResult]) -> String {
    let critical: Vec<_> = results
        .iter()
        .filter(|r| r.status == TestStatus::Failed && r.priority == TestPriority::High)
        .collect();

    if critical.is_empty() {
        return "✅ No critical issues found.\n".to_string();
    }

    let mut out = String::new();
    for test in critical {
        let _ = write!(out, "- **{}:** {}", test.name, test.description);
        if let Some(ref error) = test.error {
            let _ = write!(out, " (Error: {})", error);
        }
        out.push('\n');
    }
    out
}

fn working_categories(results: &[TestResult]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for result in results.iter().filter(|r| r.status == TestStatus::Passed) {
        if !seen.contains(&result.category.as_str()) {
            seen.push(&result.category);
        }
    }

    if seen.is_empty() {
        return "- No passing categories yet\n".to_string();
    }

    seen.iter()
        .map(|c| format!("- **{c}:** All core functionality working correctly\n"))
        .collect()
}
