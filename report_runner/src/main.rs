//! Standalone report binary.
//!
//! Usage:
//!   cargo run -p report_runner -- --input cucumber-report.json
//!       [--format cucumber|outcomes|results] [--config report.json]
//!       [--output-dir reports] [--project "Acme Website"]
//!
//! Reads one run's outcomes, writes the HTML report, the executive summary,
//! and the JSON summary, then prints a console summary. Exits with status 1
//! when any test failed.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use report_runner::console::format_summary;
use report_runner::input::{InputFormat, RunInput};
use report_runner::pipeline;
use report_runner::sink::{write_artifacts, FsSink};
use report_shared::config::ReportConfig;
use tracing::{info, warn};

#[derive(Debug, Default)]
struct Args {
    input: Option<PathBuf>,
    format: InputFormat,
    config: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    project: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut parsed = Args::default();
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" if i + 1 < args.len() => {
                parsed.input = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--format" if i + 1 < args.len() => {
                parsed.format = args[i + 1].parse()?;
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                parsed.config = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--output-dir" if i + 1 < args.len() => {
                parsed.output_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--project" if i + 1 < args.len() => {
                parsed.project = Some(args[i + 1].clone());
                i += 2;
            }
            other => {
                warn!(arg = other, "ignoring unrecognized argument");
                i += 1;
            }
        }
    }
    Ok(parsed)
}

async fn load_config(args: &Args) -> anyhow::Result<ReportConfig> {
    let mut cfg = match &args.config {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read config {}", path.display()))?;
            ReportConfig::from_json_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => ReportConfig::default(),
    };
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(project) = &args.project {
        cfg.project = project.clone();
    }
    Ok(cfg)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = parse_args()?;
    let Some(input_path) = args.input.clone() else {
        bail!("missing --input <file>");
    };
    let cfg = load_config(&args).await?;
    info!(input = %input_path.display(), format = ?args.format, output_dir = %cfg.output_dir.display(), "Starting report run");

    let text = tokio::fs::read_to_string(&input_path)
        .await
        .with_context(|| format!("read input {}", input_path.display()))?;
    let input = RunInput::parse(args.format, &text)
        .with_context(|| format!("parse input {}", input_path.display()))?;
    if input.is_empty() {
        warn!("input contains no scenarios");
    }

    let outcome = pipeline::run(&cfg, input);
    let written = write_artifacts(&FsSink, &cfg, &outcome.artifacts)
        .await
        .context("write reports")?;

    print!("{}", format_summary(&outcome.summary, &outcome.results));
    println!("\n📄 Reports saved to:");
    for path in &written {
        println!("   {}", path.display());
    }

    if outcome.has_failures() {
        std::process::exit(1);
    }
    Ok(())
}
