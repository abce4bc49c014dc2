//! Machine-readable JSON summary.

use serde::Serialize;

use crate::summary::TestSummary;

use super::ReportRenderer;

#[derive(Debug, Clone, Serialize)]
pub struct JsonMetadata {
    pub project: String,
    pub version: String,
    pub framework: String,
}

/// Summary plus run metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub summary: TestSummary,
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub metadata: JsonMetadata,
}

impl JsonReport {
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl ReportRenderer {
    pub fn render_json(&self, summary: &TestSummary) -> JsonReport {
        JsonReport {
            summary: summary.clone(),
            generated_at: self.generated_at.to_rfc3339(),
            metadata: JsonMetadata {
                project: self.metadata.project.clone(),
                version: self.metadata.version.clone(),
                framework: self.metadata.framework.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::render::RunMetadata;
    use crate::result::{TestPriority, TestResult};
    use crate::summary::SummaryAggregator;

    #[test]
    fn json_report_shape() {
        let results = vec![
            TestResult::new("a", "Functional")
                .with_priority(TestPriority::High)
                .pass(100),
            TestResult::new("b", "Functional")
                .with_priority(TestPriority::High)
                .fail(200, "timeout"),
        ];
        let summary = SummaryAggregator::compute(&results);
        let report = ReportRenderer::new(RunMetadata::default())
            .with_generated_at(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
            .render_json(&summary);
        let value = report.to_value().unwrap();

        assert_eq!(value["generatedAt"], "2026-03-01T12:00:00+00:00");
        assert_eq!(value["metadata"]["framework"], "Playwright + Cucumber");
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["duration"], 300);
        assert_eq!(value["summary"]["successRate"], 50.0);
        assert_eq!(value["summary"]["categories"]["Functional"]["failed"], 1);
        assert_eq!(value["summary"]["priorities"]["HIGH"]["total"], 2);
    }

    #[test]
    fn pretty_string_is_valid_json() {
        let summary = SummaryAggregator::compute(&[]);
        let text = ReportRenderer::new(RunMetadata::default())
            .render_json(&summary)
            .to_pretty_string()
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["summary"]["successRate"], 0.0);
    }
}
