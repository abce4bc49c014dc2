//! Cucumber JSON report ingestion.
//!
//! Reads the output of cucumber's `json` formatter (features, their elements,
//! and each element's steps) and turns every scenario into a
//! [`ScenarioOutcome`]. Step durations are nanoseconds.

use serde::Deserialize;
use tracing::debug;

use crate::hooks::{ScenarioOutcome, ScenarioStatus};

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Tag {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Step {
    #[serde(default)]
    result: Option<StepResult>,
}

#[derive(Debug, Clone, Deserialize)]
struct StepResult {
    status: ScenarioStatus,
    #[serde(default)]
    duration: Option<u64>,
    #[serde(default)]
    error_message: Option<String>,
}

/// Parses a cucumber JSON report into one outcome per scenario, in file order.
pub fn parse_report(json: &str) -> serde_json::Result<Vec<ScenarioOutcome>> {
    let features: Vec<Feature> = serde_json::from_str(json)?;
    let mut outcomes = Vec::new();

    for feature in features {
        let feature_tags: Vec<&str> = feature.tags.iter().map(|t| t.name.as_str()).collect();
        let mut background: Vec<Step> = Vec::new();

        for element in feature.elements {
            if element.kind == "background" {
                background = element.steps;
                continue;
            }

            let mut tags: Vec<String> = Vec::new();
            for tag in feature_tags
                .iter()
                .copied()
                .chain(element.tags.iter().map(|t| t.name.as_str()))
            {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }

            let steps: Vec<&StepResult> = background
                .iter()
                .chain(element.steps.iter())
                .filter_map(|s| s.result.as_ref())
                .collect();
            let (status, message) = scenario_status(&steps);
            let nanos: u64 = steps.iter().filter_map(|s| s.duration).sum();

            debug!(feature = %feature.name, scenario = %element.name, ?status, "parsed scenario");
            outcomes.push(ScenarioOutcome {
                name: element.name,
                tags,
                status,
                duration_ms: nanos / 1_000_000,
                message,
                screenshot: None,
            });
            background.clear();
        }
    }

    Ok(outcomes)
}

/// Derives a scenario status from its steps, worst status first.
fn scenario_status(steps: &[&StepResult]) -> (ScenarioStatus, Option<String>) {
    if let Some(failed) = steps.iter().find(|s| s.status == ScenarioStatus::Failed) {
        return (ScenarioStatus::Failed, failed.error_message.clone());
    }
    for status in [
        ScenarioStatus::Ambiguous,
        ScenarioStatus::Undefined,
        ScenarioStatus::Pending,
        ScenarioStatus::Skipped,
        ScenarioStatus::Unknown,
    ] {
        if let Some(step) = steps.iter().find(|s| s.status == status) {
            return (status, step.error_message.clone());
        }
    }
    (ScenarioStatus::Passed, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"[
      {
        "uri": "features/home.feature",
        "name": "Homepage",
        "tags": [{"name": "@functional", "line": 1}],
        "elements": [
          {
            "name": "Homepage loads",
            "type": "scenario",
            "tags": [{"name": "@functional"}, {"name": "@critical"}],
            "steps": [
              {"keyword": "Given ", "result": {"status": "passed", "duration": 1500000000}},
              {"keyword": "Then ", "result": {"status": "passed", "duration": 500000000}}
            ]
          },
          {
            "name": "Contact form submits",
            "type": "scenario",
            "steps": [
              {"keyword": "Given ", "result": {"status": "passed", "duration": 1000000}},
              {"keyword": "When ", "result": {"status": "failed", "duration": 2000000, "error_message": "locator timed out"}},
              {"keyword": "Then ", "result": {"status": "skipped"}}
            ]
          },
          {
            "name": "Newsletter signup",
            "type": "scenario",
            "steps": [
              {"keyword": "Given ", "result": {"status": "passed", "duration": 1000000}},
              {"keyword": "When ", "result": {"status": "undefined"}}
            ]
          }
        ]
      }
    ]"#;

    #[test]
    fn parses_scenarios_in_order() {
        let outcomes = parse_report(REPORT).unwrap();
        let names: Vec<_> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Homepage loads", "Contact form submits", "Newsletter signup"]);
    }

    #[test]
    fn sums_step_durations_into_millis() {
        let outcomes = parse_report(REPORT).unwrap();
        assert_eq!(outcomes[0].duration_ms, 2000);
        assert_eq!(outcomes[1].duration_ms, 3);
    }

    #[test]
    fn merges_feature_and_scenario_tags_without_duplicates() {
        let outcomes = parse_report(REPORT).unwrap();
        assert_eq!(outcomes[0].tags, ["@functional", "@critical"]);
        assert_eq!(outcomes[1].tags, ["@functional"]);
    }

    #[test]
    fn failed_step_fails_scenario_with_its_message() {
        let outcomes = parse_report(REPORT).unwrap();
        assert_eq!(outcomes[1].status, ScenarioStatus::Failed);
        assert_eq!(outcomes[1].message.as_deref(), Some("locator timed out"));
    }

    #[test]
    fn undefined_step_marks_scenario_undefined() {
        let outcomes = parse_report(REPORT).unwrap();
        assert_eq!(outcomes[2].status, ScenarioStatus::Undefined);
    }

    #[test]
    fn background_steps_fold_into_next_scenario() {
        let json = r#"[{"name": "F", "elements": [
            {"type": "background", "steps": [{"result": {"status": "failed", "duration": 5000000, "error_message": "setup broke"}}]},
            {"name": "S1", "type": "scenario", "steps": [{"result": {"status": "passed", "duration": 1000000}}]},
            {"name": "S2", "type": "scenario", "steps": [{"result": {"status": "passed", "duration": 1000000}}]}
        ]}]"#;
        let outcomes = parse_report(json).unwrap();

        assert_eq!(outcomes[0].status, ScenarioStatus::Failed);
        assert_eq!(outcomes[0].message.as_deref(), Some("setup broke"));
        assert_eq!(outcomes[0].duration_ms, 6);
        assert_eq!(outcomes[1].status, ScenarioStatus::Passed);
    }

    #[test]
    fn scenario_without_steps_passes() {
        let outcomes =
            parse_report(r#"[{"name": "F", "elements": [{"name": "Empty", "type": "scenario"}]}]"#)
                .unwrap();
        assert_eq!(outcomes[0].status, ScenarioStatus::Passed);
        assert_eq!(outcomes[0].duration_ms, 0);
    }

    fn status_of(step_statuses: &[&str]) -> ScenarioStatus {
        let steps: Vec<String> = step_statuses
            .iter()
            .map(|s| format!(r#"{{"result": {{"status": "{s}"}}}}"#))
            .collect();
        let json = format!(
            r#"[{{"name": "F", "elements": [{{"name": "S", "type": "scenario", "steps": [{}]}}]}}]"#,
            steps.join(",")
        );
        parse_report(&json).unwrap()[0].status
    }

    #[test]
    fn ambiguous_outranks_undefined_and_pending() {
        assert_eq!(
            status_of(&["passed", "undefined", "ambiguous", "pending"]),
            ScenarioStatus::Ambiguous
        );
        assert_eq!(status_of(&["pending", "ambiguous"]), ScenarioStatus::Ambiguous);
        assert_eq!(
            status_of(&["ambiguous", "failed"]),
            ScenarioStatus::Failed
        );
    }

    #[test]
    fn undefined_outranks_pending_and_skipped() {
        assert_eq!(
            status_of(&["skipped", "pending", "undefined"]),
            ScenarioStatus::Undefined
        );
        assert_eq!(status_of(&["skipped", "pending"]), ScenarioStatus::Pending);
    }

    #[test]
    fn only_skipped_steps_skip_the_scenario() {
        assert_eq!(status_of(&["passed", "skipped", "skipped"]), ScenarioStatus::Skipped);
        assert_eq!(status_of(&["passed", "passed"]), ScenarioStatus::Passed);
    }

    #[test]
    fn uppercase_step_statuses_are_understood() {
        assert_eq!(status_of(&["PASSED", "FAILED"]), ScenarioStatus::Failed);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_report("{not json").is_err());
        assert!(parse_report(r#"{"name": "not an array"}"#).is_err());
    }
}
