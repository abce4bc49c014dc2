//! Individual test outcomes.
//!
//! A [`TestResult`] is assembled with the builder methods below and then handed
//! to a [`ResultCollector`](crate::collector::ResultCollector). Once recorded it
//! is only ever read.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    #[serde(alias = "passed", alias = "Passed")]
    Passed,
    #[serde(alias = "failed", alias = "Failed")]
    Failed,
    #[serde(alias = "skipped", alias = "Skipped")]
    Skipped,
}

impl TestStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            TestStatus::Passed => "passed",
            TestStatus::Failed => "failed",
            TestStatus::Skipped => "skipped",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TestStatus::Passed => "✅",
            TestStatus::Failed => "❌",
            TestStatus::Skipped => "⏭️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "PASSED",
            TestStatus::Failed => "FAILED",
            TestStatus::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Severity classification for a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TestPriority {
    pub fn css_class(&self) -> &'static str {
        match self {
            TestPriority::High => "priority-high",
            TestPriority::Medium => "priority-medium",
            TestPriority::Low => "priority-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TestPriority::High => "HIGH",
            TestPriority::Medium => "MEDIUM",
            TestPriority::Low => "LOW",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TestPriority::High => "🔴",
            TestPriority::Medium => "🟡",
            TestPriority::Low => "🟢",
        }
    }
}

impl fmt::Display for TestPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single recorded test result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Scenario name. Not required to be unique within a run.
    pub name: String,
    pub status: TestStatus,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
    /// Category label, e.g. "Functional".
    pub category: String,
    #[serde(default)]
    pub priority: TestPriority,
    /// Failure message, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Path or URL of a screenshot captured for this test.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

impl TestResult {
    /// Creates a passed, zero-duration, medium-priority result. Use the
    /// builder methods to fill in the rest.
    pub fn new(name: &str, category: &str) -> Self {
        TestResult {
            name: name.to_string(),
            status: TestStatus::Passed,
            duration_ms: 0,
            category: category.to_string(),
            priority: TestPriority::Medium,
            error: None,
            description: String::new(),
            screenshot: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_priority(mut self, priority: TestPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_screenshot(mut self, screenshot: &str) -> Self {
        self.screenshot = Some(screenshot.to_string());
        self
    }

    pub fn pass(mut self, duration_ms: u64) -> Self {
        self.status = TestStatus::Passed;
        self.duration_ms = duration_ms;
        self.error = None;
        self
    }

    pub fn fail(mut self, duration_ms: u64, error: &str) -> Self {
        self.status = TestStatus::Failed;
        self.duration_ms = duration_ms;
        self.error = Some(error.to_string());
        self
    }

    pub fn skip(mut self, duration_ms: u64) -> Self {
        self.status = TestStatus::Skipped;
        self.duration_ms = duration_ms;
        self
    }

    pub fn is_failed(&self) -> bool {
        self.status == TestStatus::Failed
    }
}
