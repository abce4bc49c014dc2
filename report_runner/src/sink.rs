//! Artifact persistence.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use report_shared::config::ReportConfig;
use report_shared::hooks::ReportArtifacts;
use tokio::sync::Mutex;
use tracing::info;

/// Destination for rendered artifacts.
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()>;
}

/// Writes artifacts to the local filesystem, creating parent directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

#[async_trait]
impl ArtifactSink for FsSink {
    async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::write(path, contents)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}

/// Keeps artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<(PathBuf, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn files(&self) -> Vec<(PathBuf, String)> {
        self.files.lock().await.clone()
    }

    pub async fn get(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .await
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.clone())
    }
}

#[async_trait]
impl ArtifactSink for MemorySink {
    async fn write(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        self.files
            .lock()
            .await
            .push((path.to_path_buf(), contents.to_string()));
        Ok(())
    }
}

/// Writes the HTML report, executive summary, JSON summary, and dashboard.
/// Returns the paths written, in that order.
pub async fn write_artifacts(
    sink: &dyn ArtifactSink,
    config: &ReportConfig,
    artifacts: &ReportArtifacts,
) -> anyhow::Result<Vec<PathBuf>> {
    let json = artifacts
        .json
        .to_pretty_string()
        .context("serialize JSON summary")?;

    let outputs = [
        (config.html_path(), artifacts.html.as_str()),
        (config.summary_path(), artifacts.executive_summary.as_str()),
        (config.json_path(), json.as_str()),
        (config.dashboard_path(), artifacts.dashboard.as_str()),
    ];

    let mut written = Vec::with_capacity(outputs.len());
    for (path, contents) in outputs {
        sink.write(&path, contents).await?;
        info!(path = %path.display(), bytes = contents.len(), "report written");
        written.push(path);
    }
    Ok(written)
}
