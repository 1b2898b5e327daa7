//! System configuration records and their defaults.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::value::ConfigMap;

/// Placeholder printed in place of API key values
pub const REDACTED: &str = "[REDACTED]";

/// Root configuration for the exploration platform
///
/// Built only by the schema validator; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SystemConfig {
    /// Data source descriptors
    pub data_sources: DataSourceConfig,

    /// Seismic interpretation agent
    pub seismic_agent: ModelConfig,

    /// Drilling optimization agent
    pub drilling_agent: ModelConfig,

    /// API server settings
    pub api: ApiConfig,

    /// Feed operator corrections back into the agents
    pub enable_feedback_loop: bool,
}

pub(crate) const fn default_enable_feedback_loop() -> bool {
    true
}

/// Data source descriptors
///
/// Each section is open-ended: paths, formats, URLs and whatever else the
/// ingestion side needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DataSourceConfig {
    /// Seismic survey data
    pub seismic: ConfigMap,
    /// Well log archives
    pub well_logs: ConfigMap,
    /// Historical drilling records
    pub historical: ConfigMap,
    /// External API endpoints keyed by name
    pub external_apis: ConfigMap,
}

/// Inference agent model settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ModelConfig {
    /// Model artifact location
    pub path: String,

    /// Model version label
    pub version: String,

    /// Minimum confidence for a prediction to be acted on, expected in (0, 1]
    pub confidence_threshold: f64,

    /// Inference device (`cuda`, `cpu`, ...)
    pub device: String,
}

pub(crate) const fn default_confidence_threshold() -> f64 {
    0.7
}

pub(crate) fn default_device() -> String {
    "cuda".to_string()
}

/// API server configuration
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Worker process count
    pub workers: u32,

    /// Client identifier to API key
    pub api_keys: BTreeMap<String, String>,
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) const fn default_port() -> u16 {
    8000
}

pub(crate) const fn default_workers() -> u32 {
    4
}

impl ApiConfig {
    /// Copy with every key value replaced by [`REDACTED`]
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            api_keys: self
                .api_keys
                .keys()
                .map(|client| (client.clone(), REDACTED.to_string()))
                .collect(),
            ..self.clone()
        }
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keys never reach logs through `{:?}`.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("workers", &self.workers)
            .field("api_keys", &self.redacted().api_keys)
            .finish()
    }
}

impl SystemConfig {
    /// Copy safe to print or serialize for operators
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            api: self.api.redacted(),
            ..self.clone()
        }
    }
}
