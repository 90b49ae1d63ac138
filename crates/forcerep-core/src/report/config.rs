use super::error::ReportError;
use super::force_groups::ForceGroupReporter;
use super::state_data::StateDataOptions;
use crate::core::labels::ForceLabel;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// File form of a force group reporter.
///
/// ```toml
/// output = "energies.csv"
/// report-interval = 100
/// force-labels = ["bonds", "angles"]
///
/// [state-data]
/// step = true
/// potential-energy = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReporterConfig {
    pub output: PathBuf,
    pub report_interval: u64,
    #[serde(default)]
    pub force_labels: Vec<ForceLabel>,
    #[serde(default)]
    pub state_data: StateDataOptions,
}

impl ReporterConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(
            path = %path.display(),
            labels = config.force_labels.len(),
            "Loaded reporter configuration."
        );
        Ok(config)
    }

    /// Opens the output and builds the reporter described by this configuration.
    pub fn into_reporter(self) -> Result<ForceGroupReporter, ReportError> {
        ForceGroupReporter::new(
            self.output,
            self.report_interval,
            self.force_labels,
            self.state_data,
        )
    }
}
