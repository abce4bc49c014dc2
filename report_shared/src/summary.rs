//! Rollups over a run's results.
//!
//! [`SummaryAggregator::compute`] is a pure function: it looks only at the slice
//! it is given and produces the same [`TestSummary`] every time.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::result::{TestPriority, TestResult, TestStatus};

/// Counters for one category or priority bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
}

impl BucketStats {
    pub fn add_result(&mut self, result: &TestResult) {
        self.total += 1;
        match result.status {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
            TestStatus::Skipped => self.skipped += 1,
        }
    }

    /// Percentage of passed tests; 0.0 for an empty bucket.
    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total)
    }
}

/// Buckets keyed by label, kept in the order each label was first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown<K> {
    entries: Vec<(K, BucketStats)>,
}

impl<K> Default for Breakdown<K> {
    fn default() -> Self {
        Breakdown {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq> Breakdown<K> {
    fn bucket_mut(&mut self, key: K) -> &mut BucketStats {
        let idx = match self.entries.iter().position(|(k, _)| *k == key) {
            Some(idx) => idx,
            None => {
                self.entries.push((key, BucketStats::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&BucketStats>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, s)| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &BucketStats)> {
        self.entries.iter().map(|(k, s)| (k, s))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object so consumers can index by label.
impl<K: Serialize> Serialize for Breakdown<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, stats) in &self.entries {
            map.serialize_entry(key, stats)?;
        }
        map.end()
    }
}

/// Derived summary of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSummary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    /// Sum of every result's duration.
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    /// `passed / total * 100`, or 0.0 for an empty run.
    pub success_rate: f64,
    pub categories: Breakdown<String>,
    pub priorities: Breakdown<TestPriority>,
}

impl TestSummary {
    pub fn average_duration_ms(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        self.duration_ms / u64::from(self.total)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }
}

/// Computes [`TestSummary`] values. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryAggregator;

impl SummaryAggregator {
    pub fn compute(results: &[TestResult]) -> TestSummary {
        let mut overall = BucketStats::default();
        let mut duration_ms = 0u64;
        let mut categories = Breakdown::default();
        let mut priorities = Breakdown::default();

        for result in results {
            overall.add_result(result);
            duration_ms = duration_ms.saturating_add(result.duration_ms);
            categories
                .bucket_mut(result.category.clone())
                .add_result(result);
            priorities.bucket_mut(result.priority).add_result(result);
        }

        TestSummary {
            total: overall.total,
            passed: overall.passed,
            failed: overall.failed,
            skipped: overall.skipped,
            duration_ms,
            success_rate: overall.pass_rate(),
            categories,
            priorities,
        }
    }
}

pub(crate) fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole) * 100.0
}
