//! Append-only accumulator for one test run.

use chrono::{DateTime, Utc};

use crate::result::TestResult;

/// Collects results in the order they are reported.
///
/// Create one per run and pass it to whatever needs to record into it; there
/// is no shared instance.
#[derive(Debug, Clone)]
pub struct ResultCollector {
    results: Vec<TestResult>,
    started_at: DateTime<Utc>,
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCollector {
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// Creates a collector with an explicit run start time.
    pub fn started_at(started_at: DateTime<Utc>) -> Self {
        ResultCollector {
            results: Vec::new(),
            started_at,
        }
    }

    /// Appends a result. Duplicate names are kept.
    pub fn record(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// All recorded results, in insertion order.
    pub fn all(&self) -> &[TestResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn run_started(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn into_results(self) -> Vec<TestResult> {
        self.results
    }
}
