//! Console configuration, loaded from TOML.
//!
//! Band hours and page size are build-time constants and deliberately not
//! part of this file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{demo_snapshot, DataError, ScheduleSource, Snapshot, SnapshotFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Snapshot JSON to read. Without one, the demo club is used.
    pub data_file: Option<PathBuf>,
    /// Where the TUI keeps its persisted state.
    pub state_file: Option<PathBuf>,
    /// Where the TUI writes its log.
    pub log_file: Option<PathBuf>,
    /// `tracing` env-filter directive, e.g. "info" or "aeroclub_core=debug".
    pub log_filter: String,
    /// Maximum number of search suggestions shown.
    pub suggestion_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            state_file: None,
            log_file: None,
            log_filter: "info".into(),
            suggestion_limit: 12,
        }
    }
}

impl ConsoleConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suggestion_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "suggestion_limit",
                reason: "must be at least 1".into(),
            });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_filter",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Load the configured snapshot, or the demo club anchored on `today`.
    pub fn load_snapshot(&self, today: chrono::NaiveDate) -> Result<Snapshot, DataError> {
        match &self.data_file {
            Some(path) => SnapshotFile::new(path).fetch_all(),
            None => Ok(demo_snapshot(today)),
        }
    }
}
