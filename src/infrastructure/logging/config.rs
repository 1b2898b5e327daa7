//! Logging settings and their environment overrides.

use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment prefix for logging overrides (`OIL_EXPLORATION_LOG_LEVEL=debug`)
pub const ENV_PREFIX: &str = "OIL_EXPLORATION_LOG_";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Stdout format (json, pretty); the file is always JSON
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Log file path; `None` logs to stdout only
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,

    /// Enable stdout logging
    #[serde(default = "default_true")]
    pub enable_stdout: bool,

    /// Size in bytes at which the log file rolls over; 0 disables rollover
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Rolled-over files kept next to the live one; 0 disables rollover
    #[serde(default = "default_backup_count")]
    pub backup_count: usize,

    /// Third-party targets capped at `warn`
    #[serde(default = "default_quiet_targets")]
    pub quiet_targets: Vec<String>,
}

/// Stdout rendering; the log file is always JSON
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    Json,
    /// Multi-line human output
    Pretty,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_file: default_log_file(),
            enable_stdout: true,
            max_file_size: default_max_file_size(),
            backup_count: default_backup_count(),
            quiet_targets: default_quiet_targets(),
        }
    }
}

impl LogConfig {
    /// This configuration overridden by `OIL_EXPLORATION_LOG_*` environment variables
    ///
    /// # Errors
    /// Returns an error if an override cannot be converted to its field type.
    pub fn with_env_overrides(self) -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(self))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .context("Failed to extract logging configuration from environment")
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Json
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from("oil_exploration.log"))
}

const fn default_true() -> bool {
    true
}

const fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

const fn default_backup_count() -> usize {
    5
}

fn default_quiet_targets() -> Vec<String> {
    vec!["hyper".to_string(), "axum".to_string(), "tower_http".to_string()]
}
