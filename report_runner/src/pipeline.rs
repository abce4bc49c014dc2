//! One report run: replay input through fresh hooks and render.

use chrono::{DateTime, TimeDelta, Utc};
use report_shared::collector::ResultCollector;
use report_shared::config::ReportConfig;
use report_shared::hooks::{ReportArtifacts, ReportHooks};
use report_shared::render::ReportRenderer;
use report_shared::result::TestResult;
use report_shared::summary::TestSummary;
use tracing::info;

use crate::input::RunInput;

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub summary: TestSummary,
    pub results: Vec<TestResult>,
    pub artifacts: ReportArtifacts,
}

impl RunOutcome {
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Runs the whole pipeline in memory.
pub fn run(config: &ReportConfig, input: RunInput) -> RunOutcome {
    run_with_renderer(ReportRenderer::new(config.metadata()), input)
}

/// Replayed runs have no live start time; it is taken as the generation time
/// minus the summed test durations.
pub fn run_with_renderer(renderer: ReportRenderer, input: RunInput) -> RunOutcome {
    let started = estimated_start(renderer.generated_at(), input.duration_ms());
    let mut hooks = ReportHooks::with_collector(ResultCollector::started_at(started));
    info!(
        project = %renderer.metadata().project,
        records = input.len(),
        %started,
        "replaying run"
    );

    match input {
        RunInput::Outcomes(outcomes) => {
            for outcome in outcomes {
                hooks.after_scenario(outcome);
            }
        }
        RunInput::Results(results) => {
            for result in results {
                hooks.record_result(result);
            }
        }
    }

    let (summary, artifacts) = hooks.finish(&renderer);
    RunOutcome {
        summary,
        results: hooks.results().to_vec(),
        artifacts,
    }
}

fn estimated_start(generated_at: DateTime<Utc>, duration_ms: u64) -> DateTime<Utc> {
    i64::try_from(duration_ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .and_then(|elapsed| generated_at.checked_sub_signed(elapsed))
        .unwrap_or(generated_at)
}
