//! Report configuration.
//!
//! Loads report settings from JSON strings (file IO left to the caller).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::render::RunMetadata;

/// Where and how reports are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Project name shown in every artifact.
    #[serde(default = "default_project")]
    pub project: String,
    #[serde(default = "default_version")]
    pub version: String,
    /// Test stack identifier recorded in the JSON summary.
    #[serde(default = "default_framework")]
    pub framework: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Directory the artifacts are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_html_file")]
    pub html_file: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
    #[serde(default = "default_json_file")]
    pub json_file: String,
    #[serde(default = "default_dashboard_file")]
    pub dashboard_file: String,
}

fn default_project() -> String {
    "QA Website Testing".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_framework() -> String {
    "Playwright + Cucumber".to_string()
}

fn default_title() -> String {
    "Website Testing Report".to_string()
}

fn default_subtitle() -> String {
    "Comprehensive Quality Assurance Summary".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("reports")
}

fn default_html_file() -> String {
    "client-report.html".to_string()
}

fn default_summary_file() -> String {
    "executive-summary.md".to_string()
}

fn default_json_file() -> String {
    "test-summary.json".to_string()
}

fn default_dashboard_file() -> String {
    "dashboard.html".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            version: default_version(),
            framework: default_framework(),
            title: default_title(),
            subtitle: default_subtitle(),
            output_dir: default_output_dir(),
            html_file: default_html_file(),
            summary_file: default_summary_file(),
            json_file: default_json_file(),
            dashboard_file: default_dashboard_file(),
        }
    }
}

impl ReportConfig {
    /// Parses config from JSON. Missing keys take their defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn metadata(&self) -> RunMetadata {
        RunMetadata {
            project: self.project.clone(),
            version: self.version.clone(),
            framework: self.framework.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
        }
    }

    pub fn html_path(&self) -> PathBuf {
        self.output_dir.join(&self.html_file)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn dashboard_path(&self) -> PathBuf {
        self.output_dir.join(&self.dashboard_file)
    }
}
