//! Implementation of the `oil-exploration check` command.

use anyhow::Result;
use clap::Args;
use console::style;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::Config;

/// Arguments for `check`
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration file to validate
    pub path: PathBuf,
}

/// Summary of a configuration that passed validation
#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    /// Always true; failures leave through the error path
    pub valid: bool,
    /// File that was checked
    pub path: PathBuf,
    /// `host:port` the API server would bind
    pub api_bind: String,
    /// Seismic model version
    pub seismic_model: String,
    /// Drilling model version
    pub drilling_model: String,
    /// Number of configured API clients
    pub api_clients: usize,
    /// Whether the feedback loop is on
    pub enable_feedback_loop: bool,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        format!(
            "{} {} is valid (api {}, seismic {}, drilling {}, {} client key(s))",
            style("✓").green().bold(),
            self.path.display(),
            self.api_bind,
            self.seismic_model,
            self.drilling_model,
            self.api_clients,
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl CheckOutput {
    /// Summarize a loaded configuration
    pub fn from_config(config: &Config) -> Self {
        let system = config.get();
        Self {
            valid: true,
            path: config.source().to_path_buf(),
            api_bind: system.api.bind_address(),
            seismic_model: system.seismic_agent.version.clone(),
            drilling_model: system.drilling_agent.version.clone(),
            api_clients: system.api.api_keys.len(),
            enable_feedback_loop: system.enable_feedback_loop,
        }
    }
}

/// Run `check`: load, validate, print the summary
pub fn execute(args: CheckArgs, json_mode: bool) -> Result<()> {
    let config = Config::initialize(&args.path)?;
    output(&CheckOutput::from_config(&config), json_mode);
    Ok(())
}
