//! Self-contained HTML report.

use std::fmt::Write as _;

use crate::result::{TestResult, TestStatus};
use crate::summary::{BucketStats, TestSummary};

use super::{category_icon, display_time, escape_html as esc, format_duration, ReportRenderer};

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            line-height: 1.6;
            color: #333;
            background-color: #f5f5f5;
        }

        .container {
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
        }

        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            border-radius: 10px;
            margin-bottom: 30px;
            text-align: center;
        }

        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
        }

        .header p {
            font-size: 1.2em;
            opacity: 0.9;
        }

        .summary-cards {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }

        .card {
            background: white;
            padding: 25px;
            border-radius: 10px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            text-align: center;
        }

        .card.success { border-left: 5px solid #28a745; }
        .card.warning { border-left: 5px solid #ffc107; }
        .card.danger { border-left: 5px solid #dc3545; }
        .card.info { border-left: 5px solid #17a2b8; }

        .card h3 {
            font-size: 2.5em;
            margin-bottom: 10px;
        }

        .card p {
            color: #666;
            font-size: 1.1em;
        }

        .progress-bar {
            width: 100%;
            height: 20px;
            background-color: #e9ecef;
            border-radius: 10px;
            overflow: hidden;
            margin: 10px 0;
        }

        .progress-fill {
            height: 100%;
            background: linear-gradient(90deg, #28a745, #20c997);
        }

        .status-indicator {
            display: inline-block;
            width: 12px;
            height: 12px;
            border-radius: 50%;
            margin-right: 8px;
        }

        .status-passed { background-color: #28a745; }
        .status-failed { background-color: #dc3545; }
        .status-skipped { background-color: #ffc107; }

        .section {
            background: white;
            padding: 25px;
            border-radius: 10px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            margin-bottom: 20px;
        }

        .section h2 {
            margin-bottom: 20px;
            padding-bottom: 10px;
            border-bottom: 2px solid #f0f0f0;
        }

        .category-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 15px;
        }

        .category-item {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 8px;
            border-left: 4px solid #007bff;
        }

        .category-item h4 {
            margin-bottom: 10px;
        }

        .test-list {
            list-style: none;
        }

        .test-item {
            padding: 8px 0;
            border-bottom: 1px solid #eee;
        }

        .test-item:last-child {
            border-bottom: none;
        }

        .test-name {
            font-weight: 500;
            margin-bottom: 5px;
        }

        .test-description {
            color: #666;
            font-size: 0.9em;
        }

        .test-error {
            color: #dc3545;
            font-size: 0.8em;
            margin-top: 5px;
            white-space: pre-wrap;
        }

        .priority-badge {
            display: inline-block;
            padding: 2px 8px;
            border-radius: 12px;
            font-size: 0.8em;
            font-weight: bold;
            margin-left: 10px;
        }

        .priority-high { background-color: #dc3545; color: white; }
        .priority-medium { background-color: #ffc107; color: #333; }
        .priority-low { background-color: #28a745; color: white; }

        .footer {
            text-align: center;
            padding: 20px;
            color: #666;
            background: white;
            border-radius: 10px;
            margin-top: 30px;
        }

        @media (max-width: 768px) {
            .summary-cards, .category-grid {
                grid-template-columns: 1fr;
            }
        }
"#;

impl ReportRenderer {
    /// Renders the full HTML report.
    ///
    /// Every result field is escaped. Results are grouped by category in
    /// first-seen order, and keep their insertion order inside each group.
    pub fn render_html(&self, summary: &TestSummary, results: &[TestResult]) -> String {
        let mut html = String::new();
        html.push_str(&self.html_header());
        html.push_str(&self.html_summary(summary));
        html.push_str(&self.html_performance(summary));
        html.push_str(&self.html_categories(summary));
        html.push_str(&self.html_priorities(summary));
        html.push_str(&self.html_results(results));
        html.push_str(&self.html_footer());
        html
    }

    fn html_header(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {project}</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🔍 {title}</h1>
            <p>{subtitle}</p>
            <p><strong>Generated:</strong> {generated}</p>
        </div>
"#,
            title = esc(&self.metadata.title),
            project = esc(&self.metadata.project),
            subtitle = esc(&self.metadata.subtitle),
            generated = display_time(self.generated_at),
        )
    }

    fn html_summary(&self, summary: &TestSummary) -> String {
        format!(
            r#"
        <div class="summary-cards">
            <div class="card success">
                <h3>{}</h3>
                <p>✅ Tests Passed</p>
            </div>
            <div class="card danger">
                <h3>{}</h3>
                <p>❌ Tests Failed</p>
            </div>
            <div class="card info">
                <h3>{}</h3>
                <p>📊 Total Tests</p>
            </div>
            <div class="card warning">
                <h3>{:.1}%</h3>
                <p>🎯 Success Rate</p>
                {}
            </div>
        </div>
"#,
            summary.passed,
            summary.failed,
            summary.total,
            summary.success_rate,
            progress_bar(summary.success_rate),
        )
    }

    fn html_performance(&self, summary: &TestSummary) -> String {
        let started = self
            .run_started
            .map(display_time)
            .unwrap_or_else(|| "-".to_string());
        format!(
            r#"
        <div class="section">
            <h2>📈 Overall Performance</h2>
            <div class="category-grid">
                <div class="category-item">
                    <h4>⏱️ Test Duration</h4>
                    <p><strong>Total Time:</strong> {}</p>
                    <p><strong>Average per Test:</strong> {}</p>
                </div>
                <div class="category-item">
                    <h4>📅 Execution Time</h4>
                    <p><strong>Started:</strong> {}</p>
                    <p><strong>Completed:</strong> {}</p>
                </div>
            </div>
        </div>
"#,
            format_duration(summary.duration_ms),
            format_duration(summary.average_duration_ms()),
            started,
            display_time(self.generated_at),
        )
    }

    fn html_categories(&self, summary: &TestSummary) -> String {
        let mut html = String::from(
            r#"
        <div class="section">
            <h2>🏷️ Test Categories</h2>
            <div class="category-grid">"#,
        );
        for (category, stats) in summary.categories.iter() {
            let heading = format!("{} {}", category_icon(category), esc(category));
            html.push_str(&bucket_card(&heading, stats));
        }
        html.push_str("\n            </div>\n        </div>\n");
        html
    }

    fn html_priorities(&self, summary: &TestSummary) -> String {
        let mut html = String::from(
            r#"
        <div class="section">
            <h2>⚡ Priority Breakdown</h2>
            <div class="category-grid">"#,
        );
        for (priority, stats) in summary.priorities.iter() {
            let heading = format!("{} {} Priority", priority.icon(), priority.label());
            html.push_str(&bucket_card(&heading, stats));
        }
        html.push_str("\n            </div>\n        </div>\n");
        html
    }

    fn html_results(&self, results: &[TestResult]) -> String {
        let mut html = String::from(
            r#"
        <div class="section">
            <h2>🔍 Detailed Test Results</h2>
            <div class="category-grid">"#,
        );

        for (category, tests) in group_by_category(results) {
            let _ = write!(
                html,
                r#"
                <div class="category-item">
                    <h4>{} {}</h4>
                    <ul class="test-list">"#,
                category_icon(category),
                esc(category),
            );
            for test in tests {
                html.push_str(&html_test_item(test));
            }
            html.push_str("\n                    </ul>\n                </div>");
        }

        html.push_str("\n            </div>\n        </div>\n");
        html
    }

    fn html_footer(&self) -> String {
        format!(
            r#"
        <div class="footer">
            <p>📧 For technical details, please contact the QA team</p>
            <p>🔄 This report was automatically generated by {} {} ({})</p>
        </div>
    </div>
</body>
</html>
"#,
            esc(&self.metadata.project),
            esc(&self.metadata.version),
            esc(&self.metadata.framework),
        )
    }
}

fn html_test_item(test: &TestResult) -> String {
    let error = match (&test.status, &test.error) {
        (TestStatus::Failed, Some(error)) => {
            format!(r#"<div class="test-error">Error: {}</div>"#, esc(error))
        }
        _ => String::new(),
    };
    let screenshot = match &test.screenshot {
        Some(src) => format!(
            r#"<div class="test-description"><a href="{}">📸 Screenshot</a></div>"#,
            esc(src)
        ),
        None => String::new(),
    };
    format!(
        r#"
                        <li class="test-item">
                            <div class="test-name">
                                <span class="status-indicator status-{}"></span>
                                {}
                                <span class="priority-badge {}">{}</span>
                            </div>
                            <div class="test-description">{}</div>
                            {}
                            {}
                        </li>"#,
        test.status.css_class(),
        esc(&test.name),
        test.priority.css_class(),
        test.priority.label(),
        esc(&test.description),
        error,
        screenshot,
    )
}

fn bucket_card(heading: &str, stats: &BucketStats) -> String {
    format!(
        r#"
                <div class="category-item">
                    <h4>{}</h4>
                    <p><strong>Total:</strong> {} | <strong>Passed:</strong> {} | <strong>Failed:</strong> {} | <strong>Skipped:</strong> {}</p>
                    {}
                </div>"#,
        heading,
        stats.total,
        stats.passed,
        stats.failed,
        stats.skipped,
        progress_bar(stats.pass_rate()),
    )
}

pub(super) fn progress_bar(percent: f64) -> String {
    format!(
        r#"<div class="progress-bar"><div class="progress-fill" style="width: {:.1}%"></div></div>"#,
        percent
    )
}

/// Groups results by category, first-seen order, insertion order within a group.
fn group_by_category(results: &[TestResult]) -> Vec<(&str, Vec<&TestResult>)> {
    let mut groups: Vec<(&str, Vec<&TestResult>)> = Vec::new();
    for result in results {
        match groups.iter_mut().find(|(c, _)| *c == result.category) {
            Some((_, tests)) => tests.push(result),
            None => groups.push((result.category.as_str(), vec![result])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::render::RunMetadata;
    use crate::result::TestPriority;
    use crate::summary::SummaryAggregator;

    fn renderer() -> ReportRenderer {
        ReportRenderer::new(RunMetadata::default())
            .with_generated_at(chrono::Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn html_contains_summary_and_results() {
        let results = vec![
            TestResult::new("Homepage loads", "Functional")
                .with_priority(TestPriority::High)
                .pass(2500),
            TestResult::new("Safari layout", "Cross-Browser").fail(3800, "flexbox broken"),
        ];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_html(&summary, &results);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Homepage loads"));
        assert!(html.contains("Error: flexbox broken"));
        assert!(html.contains("50.0%"));
        assert!(html.contains("2026-01-02 03:04:05 UTC"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn result_fields_are_escaped() {
        let results = vec![TestResult::new("<script>alert(1)</script>", "<b>Cat</b>")
            .fail(1, "expected <div> & got \"nothing\"")];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_html(&summary, &results);

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<b>Cat</b>"));
        assert!(html.contains("expected &lt;div&gt; &amp; got &quot;nothing&quot;"));
    }

    #[test]
    fn groups_preserve_insertion_order() {
        let results = vec![
            TestResult::new("first-func", "Functional").pass(1),
            TestResult::new("first-perf", "Performance").pass(1),
            TestResult::new("second-func", "Functional").pass(1),
        ];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_html(&summary, &results);

        let section = &html[html.find("Detailed Test Results").unwrap()..];
        let first = section.find("first-func").unwrap();
        let second = section.find("second-func").unwrap();
        let perf = section.find("first-perf").unwrap();
        assert!(first < second);
        assert!(second < perf);
    }

    #[test]
    fn screenshot_link_is_escaped() {
        let results = vec![TestResult::new("a", "General")
            .with_screenshot("shots/a\"onload=\"x.png")
            .fail(1, "boom")];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_html(&summary, &results);

        assert!(html.contains(r#"<a href="shots/a&quot;onload=&quot;x.png">📸 Screenshot</a>"#));
    }

    #[test]
    fn empty_run_renders_zero_percent() {
        let summary = SummaryAggregator::compute(&[]);
        let html = renderer().render_html(&summary, &[]);

        assert!(html.contains("width: 0.0%"));
        assert!(!html.contains("NaN"));
    }
}
