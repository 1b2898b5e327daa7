//! Process-wide owner of the loaded configuration.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use super::error::ConfigError;
use super::loader::ConfigLoader;
use crate::domain::models::SystemConfig;

/// Owner of the validated system configuration
///
/// A `Config` only exists once loading has succeeded; there is no empty or
/// partially-loaded state and no way to reload. The configuration is shared
/// behind an `Arc` and never mutated, so any number of threads may read it.
#[derive(Debug, Clone)]
pub struct Config {
    system: Arc<SystemConfig>,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl Config {
    /// Load and validate the configuration at `path`
    ///
    /// # Errors
    /// Propagates the loader's [`ConfigError`] unchanged.
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let system = ConfigLoader::load(path)?;
        let loaded_at = Utc::now();

        info!(
            path = %path.display(),
            api = %system.api.bind_address(),
            seismic_model = %system.seismic_agent.version,
            drilling_model = %system.drilling_agent.version,
            feedback_loop = system.enable_feedback_loop,
            "configuration loaded"
        );

        Ok(Self {
            system: Arc::new(system),
            source: path.to_path_buf(),
            loaded_at,
        })
    }

    /// The validated configuration
    pub fn get(&self) -> &SystemConfig {
        &self.system
    }

    /// Shared handle for other threads or tasks
    pub fn shared(&self) -> Arc<SystemConfig> {
        Arc::clone(&self.system)
    }

    /// File the configuration was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// When validation succeeded
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
