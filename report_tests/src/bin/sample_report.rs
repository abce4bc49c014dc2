//! Sample report generator.
//!
//! Renders the full report set from a built-in sample run so the output can be
//! inspected without a browser suite.
//!
//! Usage:
//!   cargo run -p report_tests --bin sample_report -- [output-dir]

use std::path::PathBuf;

use anyhow::Context;
use report_runner::console::format_summary;
use report_runner::input::RunInput;
use report_runner::pipeline;
use report_runner::sink::{write_artifacts, FsSink};
use report_shared::config::ReportConfig;
use report_shared::result::{TestPriority, TestResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("test-reports"));

    println!("🚀 Generating sample reports...");

    let cfg = ReportConfig {
        output_dir,
        html_file: "sample-client-report.html".to_string(),
        ..ReportConfig::default()
    };

    let outcome = pipeline::run(&cfg, RunInput::Results(sample_results()));
    let written = write_artifacts(&FsSink, &cfg, &outcome.artifacts)
        .await
        .context("write sample reports")?;

    print!("{}", format_summary(&outcome.summary, &outcome.results));
    println!("\n📄 Reports saved to:");
    for path in &written {
        println!("   {}", path.display());
    }
    Ok(())
}

/// (name, category, priority, description, duration ms, failure message)
type Sample = (&'static str, &'static str, TestPriority, &'static str, u64, Option<&'static str>);

const SAMPLES: &[Sample] = &[
    (
        "Homepage loads successfully",
        "Functional",
        TestPriority::High,
        "Verifies that the homepage loads correctly and displays all essential elements",
        2500,
        None,
    ),
    (
        "Navigation menu works correctly",
        "Functional",
        TestPriority::High,
        "Tests that all navigation links work and lead to correct pages",
        1800,
        None,
    ),
    (
        "Contact form validation",
        "Functional",
        TestPriority::High,
        "Ensures form validation works correctly for all required fields",
        3200,
        None,
    ),
    (
        "Mobile responsive design",
        "Responsive",
        TestPriority::Medium,
        "Verifies website adapts properly to mobile screen sizes",
        4100,
        None,
    ),
    (
        "Tablet responsive design",
        "Responsive",
        TestPriority::Medium,
        "Ensures proper layout on tablet devices",
        3800,
        None,
    ),
    (
        "Desktop layout optimization",
        "Responsive",
        TestPriority::Medium,
        "Tests desktop-specific layout and functionality",
        2200,
        None,
    ),
    (
        "Page load performance",
        "Performance",
        TestPriority::High,
        "Validates that pages load within acceptable time limits",
        1500,
        None,
    ),
    (
        "Image optimization",
        "Performance",
        TestPriority::Medium,
        "Checks that images are properly optimized for web",
        2800,
        None,
    ),
    (
        "Accessibility compliance",
        "Accessibility",
        TestPriority::High,
        "Ensures website meets accessibility standards",
        3500,
        Some("Missing alt text on 3 images"),
    ),
    (
        "Keyboard navigation",
        "Accessibility",
        TestPriority::Medium,
        "Tests keyboard-only navigation functionality",
        2100,
        None,
    ),
    (
        "Cross-browser compatibility - Chrome",
        "Cross-Browser",
        TestPriority::Medium,
        "Tests functionality in Chrome browser",
        4200,
        None,
    ),
    (
        "Cross-browser compatibility - Firefox",
        "Cross-Browser",
        TestPriority::Medium,
        "Tests functionality in Firefox browser",
        4100,
        None,
    ),
    (
        "Cross-browser compatibility - Safari",
        "Cross-Browser",
        TestPriority::Medium,
        "Tests functionality in Safari browser",
        3800,
        Some("CSS flexbox not rendering correctly"),
    ),
    (
        "UI consistency check",
        "UI/UX",
        TestPriority::Low,
        "Verifies consistent styling across all pages",
        1900,
        None,
    ),
    (
        "Button hover effects",
        "UI/UX",
        TestPriority::Low,
        "Tests interactive button hover states",
        1200,
        None,
    ),
];

fn sample_results() -> Vec<TestResult> {
    SAMPLES
        .iter()
        .map(|&(name, category, priority, description, duration_ms, error)| {
            let result = TestResult::new(name, category)
                .with_priority(priority)
                .with_description(description);
            match error {
                Some(error) => result.fail(duration_ms, error),
                None => result.pass(duration_ms),
            }
        })
        .collect()
}
