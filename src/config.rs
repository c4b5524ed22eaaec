//! Solver configuration loaded from TOML.

use crate::games::hanoi::{HanoiError, validate_disk_count};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the solve report is printed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One console line per move.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Configuration for a solve run.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HanoiConfig {
    /// Number of disks (validated when the game is built).
    #[serde(default = "default_disks")]
    disks: i64,

    /// Print the initial and final tower states around the moves.
    #[serde(default = "default_show_state")]
    show_state: bool,

    /// Report format.
    #[serde(default)]
    format: OutputFormat,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_disks() -> i64 {
    3
}

fn default_show_state() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            disks: default_disks(),
            show_state: default_show_state(),
            format: OutputFormat::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl HanoiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(disks = config.disks, format = %config.format, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the disk count.
    pub fn with_disks(mut self, disks: i64) -> Self {
        self.disks = disks;
        self
    }

    /// Overrides the report format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Overrides whether state dumps are printed.
    pub fn with_show_state(mut self, show_state: bool) -> Self {
        self.show_state = show_state;
        self
    }

    /// Returns the validated disk count.
    pub fn disk_count(&self) -> Result<usize, HanoiError> {
        validate_disk_count(self.disks)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
