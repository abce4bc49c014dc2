//! Input formats the harness accepts.

use std::fmt;
use std::str::FromStr;

use report_shared::cucumber;
use report_shared::hooks::ScenarioOutcome;
use report_shared::result::TestResult;

/// Shape of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Output of cucumber's `json` formatter.
    #[default]
    Cucumber,
    /// JSON array of scenario outcomes (name, tags, status, durationMs, message).
    Outcomes,
    /// JSON array of already-classified test results.
    Results,
}

impl FromStr for InputFormat {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cucumber" => Ok(InputFormat::Cucumber),
            "outcomes" => Ok(InputFormat::Outcomes),
            "results" => Ok(InputFormat::Results),
            other => Err(InputError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parsed run input.
#[derive(Debug, Clone)]
pub enum RunInput {
    Outcomes(Vec<ScenarioOutcome>),
    Results(Vec<TestResult>),
}

impl RunInput {
    pub fn parse(format: InputFormat, text: &str) -> Result<Self, InputError> {
        let input = match format {
            InputFormat::Cucumber => RunInput::Outcomes(cucumber::parse_report(text)?),
            InputFormat::Outcomes => RunInput::Outcomes(serde_json::from_str(text)?),
            InputFormat::Results => RunInput::Results(serde_json::from_str(text)?),
        };
        Ok(input)
    }

    pub fn len(&self) -> usize {
        match self {
            RunInput::Outcomes(o) => o.len(),
            RunInput::Results(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of the recorded durations in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        match self {
            RunInput::Outcomes(o) => o.iter().map(|o| o.duration_ms).sum(),
            RunInput::Results(r) => r.iter().map(|r| r.duration_ms).sum(),
        }
    }
}

/// Input loading errors.
#[derive(Debug)]
pub enum InputError {
    UnknownFormat(String),
    Parse(serde_json::Error),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::UnknownFormat(name) => write!(
                f,
                "unknown input format '{}' (expected cucumber, outcomes, or results)",
                name
            ),
            InputError::Parse(e) => write!(f, "invalid input JSON: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Parse(e) => Some(e),
            InputError::UnknownFormat(_) => None,
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("Cucumber".parse::<InputFormat>().unwrap(), InputFormat::Cucumber);
        assert_eq!("RESULTS".parse::<InputFormat>().unwrap(), InputFormat::Results);
        assert!(matches!(
            "junit".parse::<InputFormat>(),
            Err(InputError::UnknownFormat(name)) if name == "junit"
        ));
    }

    #[test]
    fn parses_outcome_list() {
        let input = RunInput::parse(
            InputFormat::Outcomes,
            r#"[{"name": "a", "tags": ["@mobile"], "status": "passed", "duration_ms": 12}]"#,
        )
        .unwrap();
        assert_eq!(input.len(), 1);
        assert!(matches!(input, RunInput::Outcomes(_)));
    }

    #[test]
    fn parses_result_list() {
        let input = RunInput::parse(
            InputFormat::Results,
            r#"[{"name": "a", "status": "FAILED", "durationMs": 5, "category": "Mobile", "priority": "LOW", "error": "boom"}]"#,
        )
        .unwrap();
        match input {
            RunInput::Results(results) => assert_eq!(results[0].error.as_deref(), Some("boom")),
            other => panic!("unexpected input {other:?}"),
        }
    }

    #[test]
    fn parse_errors_keep_their_source() {
        let err = RunInput::parse(InputFormat::Cucumber, "[{").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("invalid input JSON"));
    }
}
