//! Report rendering.
//!
//! A [`ReportRenderer`] turns an already-computed [`TestSummary`](crate::summary::TestSummary)
//! plus the raw results into four artifacts:
//! - a self-contained HTML report ([`ReportRenderer::render_html`])
//! - a Markdown executive summary ([`ReportRenderer::render_executive_summary`])
//! - a JSON summary ([`ReportRenderer::render_json`])
//! - a one-page HTML dashboard ([`ReportRenderer::render_dashboard`])
//!
//! Rendering is synchronous string construction and never fails. Writing the
//! output anywhere is the caller's job.

mod dashboard;
mod html;
mod json;
mod markdown;

use chrono::{DateTime, Utc};

pub use json::{JsonMetadata, JsonReport};
pub use markdown::{Assessment, Recommendation};

/// Run-level labels shown in every artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMetadata {
    pub project: String,
    pub version: String,
    pub framework: String,
    pub title: String,
    pub subtitle: String,
}

impl Default for RunMetadata {
    fn default() -> Self {
        RunMetadata {
            project: "QA Website Testing".to_string(),
            version: "1.0.0".to_string(),
            framework: "Playwright + Cucumber".to_string(),
            title: "Website Testing Report".to_string(),
            subtitle: "Comprehensive Quality Assurance Summary".to_string(),
        }
    }
}

/// Renders reports for one run.
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    metadata: RunMetadata,
    generated_at: DateTime<Utc>,
    run_started: Option<DateTime<Utc>>,
}

impl ReportRenderer {
    pub fn new(metadata: RunMetadata) -> Self {
        ReportRenderer {
            metadata,
            generated_at: Utc::now(),
            run_started: None,
        }
    }

    /// Pins the generation timestamp, mainly for reproducible output.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_run_started(mut self, started: DateTime<Utc>) -> Self {
        self.run_started = Some(started);
        self
    }

    pub fn metadata(&self) -> &RunMetadata {
        &self.metadata
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Formats milliseconds as `1h 2m 3s`, `2m 3s`, or `3s`.
pub fn format_duration(ms: u64) -> String {
    let seconds = ms / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Functional" => "🔧",
        "UI/UX" => "🎨",
        "Responsive" | "Mobile" => "📱",
        "Performance" => "⚡",
        "Accessibility" => "♿",
        "Cross-Browser" => "🌐",
        "Desktop" => "💻",
        "Tablet" => "📟",
        _ => "📋",
    }
}

fn display_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
