//! One-page HTML dashboard built from the summary alone.
//!
//! Charts are plain CSS bars so the file has no script or network dependency.

use std::fmt::Write as _;

use crate::summary::{percentage, BucketStats, TestSummary};

use super::html::progress_bar;
use super::{category_icon, display_time, escape_html as esc, ReportRenderer};

const STYLE: &str = r#"
        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }

        .dashboard {
            max-width: 1400px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
            overflow: hidden;
        }

        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }

        .header h1 {
            font-size: 2.5em;
            margin-bottom: 10px;
        }

        .stats-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            padding: 30px;
            background: #f8f9fa;
        }

        .stat-card {
            background: white;
            padding: 25px;
            border-radius: 10px;
            text-align: center;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }

        .stat-card.success { border-left: 5px solid #28a745; }
        .stat-card.danger { border-left: 5px solid #dc3545; }
        .stat-card.warning { border-left: 5px solid #ffc107; }
        .stat-card.info { border-left: 5px solid #17a2b8; }

        .stat-card h3 {
            font-size: 2.5em;
            margin-bottom: 10px;
            color: #333;
        }

        .chart-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(400px, 1fr));
            gap: 20px;
            padding: 30px;
        }

        .chart-container {
            background: white;
            border-radius: 10px;
            padding: 20px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        }

        .chart-container h3 {
            color: #333;
            margin-bottom: 20px;
            text-align: center;
        }

        .bar-row {
            display: grid;
            grid-template-columns: 140px 1fr 60px;
            align-items: center;
            gap: 10px;
            margin-bottom: 8px;
        }

        .bar-track {
            height: 18px;
            background-color: #e9ecef;
            border-radius: 9px;
            overflow: hidden;
        }

        .bar {
            height: 100%;
        }

        .bar.passed { background-color: #28a745; }
        .bar.failed { background-color: #dc3545; }
        .bar.skipped { background-color: #ffc107; }
        .bar.total { background-color: rgba(102, 126, 234, 0.8); }

        .progress-section {
            padding: 30px;
            background: #f8f9fa;
        }

        .progress-item {
            background: white;
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 15px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
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

        .footer {
            background: #333;
            color: white;
            text-align: center;
            padding: 20px;
        }

        @media (max-width: 768px) {
            .stats-grid, .chart-grid {
                grid-template-columns: 1fr;
            }
        }
"#;

impl ReportRenderer {
    /// Renders the dashboard: headline counts, status and category charts,
    /// and per-category and per-priority pass rates.
    pub fn render_dashboard(&self, summary: &TestSummary) -> String {
        let mut html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{project} Testing Dashboard</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="dashboard">
        <div class="header">
            <h1>📊 {project} Testing Dashboard</h1>
            <p>Quality Assurance Overview</p>
            <p><strong>Last Updated:</strong> {updated}</p>
        </div>

        <div class="stats-grid">
            <div class="stat-card success"><h3>{passed}</h3><p>✅ Tests Passed</p></div>
            <div class="stat-card danger"><h3>{failed}</h3><p>❌ Tests Failed</p></div>
            <div class="stat-card info"><h3>{total}</h3><p>📊 Total Tests</p></div>
            <div class="stat-card warning"><h3>{rate:.1}%</h3><p>🎯 Success Rate</p></div>
        </div>
"#,
            project = esc(&self.metadata.project),
            updated = display_time(self.generated_at),
            passed = summary.passed,
            failed = summary.failed,
            total = summary.total,
            rate = summary.success_rate,
        );

        html.push_str("\n        <div class=\"chart-grid\">");
        html.push_str(&status_chart(summary));
        html.push_str(&category_chart(summary));
        html.push_str("\n        </div>\n");

        html.push_str(
            r#"
        <div class="progress-section">
            <h3 style="text-align: center; margin-bottom: 20px; color: #333;">📋 Category Performance</h3>"#,
        );
        for (category, stats) in summary.categories.iter() {
            let heading = format!("{} {}", category_icon(category), esc(category));
            html.push_str(&progress_item(&heading, stats));
        }
        html.push_str(
            r#"
            <h3 style="text-align: center; margin: 20px 0; color: #333;">⚡ Priority Performance</h3>"#,
        );
        for (priority, stats) in summary.priorities.iter() {
            let heading = format!("{} {}", priority.icon(), priority.label());
            html.push_str(&progress_item(&heading, stats));
        }
        html.push_str("\n        </div>\n");

        html.push_str(
            r#"
        <div class="footer">
            <p>🔄 Regenerated with every report run</p>
            <p>📧 Contact QA team for detailed technical reports</p>
        </div>
    </div>
</body>
</html>
"#,
        );
        html
    }
}

fn status_chart(summary: &TestSummary) -> String {
    let mut html = String::from(
        r#"
            <div class="chart-container">
                <h3>📈 Test Results Overview</h3>"#,
    );
    for (label, class, count) in [
        ("Passed", "passed", summary.passed),
        ("Failed", "failed", summary.failed),
        ("Skipped", "skipped", summary.skipped),
    ] {
        html.push_str(&bar_row(label, class, count, percentage(count, summary.total)));
    }
    html.push_str("\n            </div>");
    html
}

/// Totals are scaled against the largest category; passes against that category's total.
fn category_chart(summary: &TestSummary) -> String {
    let largest = summary
        .categories
        .iter()
        .map(|(_, s)| s.total)
        .max()
        .unwrap_or(0);

    let mut html = String::from(
        r#"
            <div class="chart-container">
                <h3>🏷️ Category Distribution</h3>"#,
    );
    for (category, stats) in summary.categories.iter() {
        let _ = write!(
            html,
            r#"
                <h4>{} {}</h4>"#,
            category_icon(category),
            esc(category),
        );
        html.push_str(&bar_row(
            "Total Tests",
            "total",
            stats.total,
            percentage(stats.total, largest),
        ));
        html.push_str(&bar_row(
            "Passed Tests",
            "passed",
            stats.passed,
            percentage(stats.passed, largest),
        ));
    }
    html.push_str("\n            </div>");
    html
}

fn bar_row(label: &str, class: &str, count: u32, width: f64) -> String {
    format!(
        r#"
                <div class="bar-row">
                    <span>{}</span>
                    <div class="bar-track"><div class="bar {}" style="width: {:.1}%"></div></div>
                    <span>{}</span>
                </div>"#,
        label, class, width, count,
    )
}

fn progress_item(heading: &str, stats: &BucketStats) -> String {
    format!(
        r#"
            <div class="progress-item">
                <h4>{}</h4>
                <p><strong>{}/{}</strong> tests passed</p>
                {}
                <p style="text-align: right; color: #666;">{:.1}% success rate</p>
            </div>"#,
        heading,
        stats.passed,
        stats.total,
        progress_bar(stats.pass_rate()),
        stats.pass_rate(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::render::RunMetadata;
    use crate::result::{TestPriority, TestResult};
    use crate::summary::SummaryAggregator;

    fn renderer() -> ReportRenderer {
        ReportRenderer::new(RunMetadata {
            project: "Acme <Shop>".to_string(),
            ..RunMetadata::default()
        })
        .with_generated_at(chrono::Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap())
    }

    #[test]
    fn dashboard_shows_headline_counts_and_buckets() {
        let results = vec![
            TestResult::new("a", "Functional")
                .with_priority(TestPriority::High)
                .pass(10),
            TestResult::new("b", "Functional")
                .with_priority(TestPriority::High)
                .fail(10, "x"),
            TestResult::new("c", "Performance")
                .with_priority(TestPriority::Low)
                .pass(10),
        ];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_dashboard(&summary);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h3>66.7%</h3>"));
        assert!(html.contains("2026-02-03 04:05:06 UTC"));
        assert!(html.contains("🔧 Functional"));
        assert!(html.contains("<strong>1/2</strong> tests passed"));
        assert!(html.contains("50.0% success rate"));
        assert!(html.contains("🔴 HIGH"));
        assert!(html.contains("🟢 LOW"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn categories_keep_first_seen_order() {
        let results = vec![
            TestResult::new("a", "UI/UX").pass(1),
            TestResult::new("b", "Functional").pass(1),
        ];
        let summary = SummaryAggregator::compute(&results);
        let html = renderer().render_dashboard(&summary);

        let section = &html[html.find("Category Performance").unwrap()..];
        assert!(section.find("UI/UX").unwrap() < section.find("Functional").unwrap());
    }

    #[test]
    fn project_name_is_escaped() {
        let html = renderer().render_dashboard(&SummaryAggregator::compute(&[]));
        assert!(html.contains("Acme &lt;Shop&gt; Testing Dashboard"));
        assert!(!html.contains("<Shop>"));
    }

    #[test]
    fn empty_run_has_no_nan() {
        let html = renderer().render_dashboard(&SummaryAggregator::compute(&[]));
        assert!(html.contains("<h3>0.0%</h3>"));
        assert!(!html.contains("NaN"));
        assert!(!html.contains("<script"));
    }
}
