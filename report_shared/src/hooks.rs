//! Scenario lifecycle hooks.
//!
//! [`ReportHooks`] is the context object a test harness drives: call
//! [`ReportHooks::after_scenario`] once per finished scenario, then
//! [`ReportHooks::finish`] once at the end of the run. Each run constructs its
//! own instance.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collector::ResultCollector;
use crate::render::{JsonReport, ReportRenderer};
use crate::result::{TestResult, TestStatus};
use crate::summary::{SummaryAggregator, TestSummary};
use crate::tags::TagClassifier;

/// Failure message used when the harness reports none.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Test failed";

/// Scenario status as reported by a cucumber-style harness.
///
/// Deserialization is case-insensitive (`passed`, `PASSED`, `Passed`); any
/// other string becomes [`ScenarioStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ScenarioStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
    Ambiguous,
    Unknown,
}

impl From<String> for ScenarioStatus {
    fn from(s: String) -> Self {
        ScenarioStatus::from_label(&s)
    }
}

impl ScenarioStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "passed" => ScenarioStatus::Passed,
            "failed" => ScenarioStatus::Failed,
            "skipped" => ScenarioStatus::Skipped,
            "pending" => ScenarioStatus::Pending,
            "undefined" => ScenarioStatus::Undefined,
            "ambiguous" => ScenarioStatus::Ambiguous,
            _ => ScenarioStatus::Unknown,
        }
    }

    /// Collapses the harness vocabulary onto the three report statuses.
    pub fn to_test_status(self) -> TestStatus {
        match self {
            ScenarioStatus::Passed => TestStatus::Passed,
            ScenarioStatus::Failed | ScenarioStatus::Ambiguous => TestStatus::Failed,
            ScenarioStatus::Skipped
            | ScenarioStatus::Pending
            | ScenarioStatus::Undefined
            | ScenarioStatus::Unknown => TestStatus::Skipped,
        }
    }
}

/// What the harness knows about a finished scenario.
///
/// JSON field names are camelCase like [`TestResult`]; `duration_ms` is
/// accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: ScenarioStatus,
    #[serde(default, alias = "duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

impl ScenarioOutcome {
    pub fn new(name: &str, status: ScenarioStatus, duration_ms: u64) -> Self {
        ScenarioOutcome {
            name: name.to_string(),
            tags: Vec::new(),
            status,
            duration_ms,
            message: None,
            screenshot: None,
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_screenshot(mut self, screenshot: &str) -> Self {
        self.screenshot = Some(screenshot.to_string());
        self
    }
}

/// The rendered artifacts of a run.
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    pub html: String,
    pub executive_summary: String,
    pub json: JsonReport,
    pub dashboard: String,
}

/// Per-run hook context owning the collector.
#[derive(Debug, Default)]
pub struct ReportHooks {
    collector: ResultCollector,
    classifier: TagClassifier,
}

impl ReportHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collector(collector: ResultCollector) -> Self {
        ReportHooks {
            collector,
            classifier: TagClassifier::new(),
        }
    }

    pub fn collector(&self) -> &ResultCollector {
        &self.collector
    }

    pub fn results(&self) -> &[TestResult] {
        self.collector.all()
    }

    /// Classifies and records one finished scenario.
    pub fn after_scenario(&mut self, outcome: ScenarioOutcome) -> &TestResult {
        let classification = self.classifier.classify(outcome.tags.as_slice());
        let status = outcome.status.to_test_status();
        let error = match status {
            TestStatus::Failed => Some(
                outcome
                    .message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            ),
            _ => None,
        };

        let result = TestResult {
            name: outcome.name,
            status,
            duration_ms: outcome.duration_ms,
            category: classification.category,
            priority: classification.priority,
            error,
            description: classification.description,
            screenshot: outcome.screenshot,
        };

        match result.status {
            TestStatus::Failed => warn!(
                name = %result.name,
                category = %result.category,
                duration_ms = result.duration_ms,
                error = result.error.as_deref().unwrap_or_default(),
                "{} scenario failed",
                result.status.icon()
            ),
            _ => info!(
                name = %result.name,
                category = %result.category,
                status = %result.status,
                duration_ms = result.duration_ms,
                "{} scenario finished",
                result.status.icon()
            ),
        }
        if status == TestStatus::Skipped && outcome.status != ScenarioStatus::Skipped {
            debug!(name = %result.name, harness_status = ?outcome.status, "counted as skipped");
        }

        self.collector.record(result);
        let idx = self.collector.len() - 1;
        &self.collector.all()[idx]
    }

    /// Records a result that was already classified upstream.
    pub fn record_result(&mut self, result: TestResult) {
        debug!(name = %result.name, status = %result.status, "recorded pre-classified result");
        self.collector.record(result);
    }

    pub fn summary(&self) -> TestSummary {
        SummaryAggregator::compute(self.collector.all())
    }

    /// Computes the summary once and renders every artifact.
    pub fn finish(&self, renderer: &ReportRenderer) -> (TestSummary, ReportArtifacts) {
        let summary = self.summary();
        let renderer = renderer.clone().with_run_started(self.collector.run_started());
        let results = self.collector.all();

        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            success_rate = summary.success_rate,
            "rendering reports"
        );

        let artifacts = ReportArtifacts {
            html: renderer.render_html(&summary, results),
            executive_summary: renderer.render_executive_summary(&summary, results),
            json: renderer.render_json(&summary),
            dashboard: renderer.render_dashboard(&summary),
        };
        (summary, artifacts)
    }
}
