//! Implementation of the `oil-exploration show` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{label, output, section_header, CommandOutput};
use crate::domain::models::{ConfigMap, ModelConfig, SystemConfig};
use crate::infrastructure::config::Config;

/// Arguments for `show`
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Configuration file to display
    pub path: PathBuf,
}

/// Redacted view of a validated configuration
#[derive(Debug, serde::Serialize)]
#[serde(transparent)]
pub struct ShowOutput {
    /// Configuration with key values already redacted
    pub config: SystemConfig,
}

fn push_section(lines: &mut Vec<String>, name: &str, section: &ConfigMap) {
    lines.push(format!("  {}", label(name)));
    if section.is_empty() {
        lines.push("    (empty)".to_string());
    }
    for (key, value) in section {
        lines.push(format!("    {key} = {value}"));
    }
}

fn push_model(lines: &mut Vec<String>, title: &str, model: &ModelConfig) {
    lines.push(section_header(title));
    lines.push(format!("  {} {}", label("path"), model.path));
    lines.push(format!("  {} {}", label("version"), model.version));
    lines.push(format!(
        "  {} {}",
        label("confidence_threshold"),
        model.confidence_threshold
    ));
    lines.push(format!("  {} {}", label("device"), model.device));
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let config = &self.config;
        let mut lines = vec![section_header("Data sources")];
        push_section(&mut lines, "seismic", &config.data_sources.seismic);
        push_section(&mut lines, "well_logs", &config.data_sources.well_logs);
        push_section(&mut lines, "historical", &config.data_sources.historical);
        push_section(&mut lines, "external_apis", &config.data_sources.external_apis);

        push_model(&mut lines, "Seismic agent", &config.seismic_agent);
        push_model(&mut lines, "Drilling agent", &config.drilling_agent);

        lines.push(section_header("API"));
        lines.push(format!("  {} {}", label("bind"), config.api.bind_address()));
        lines.push(format!("  {} {}", label("workers"), config.api.workers));
        let clients: Vec<&str> = config.api.api_keys.keys().map(String::as_str).collect();
        lines.push(format!("  {} {}", label("clients"), clients.join(", ")));

        lines.push(section_header("Features"));
        lines.push(format!(
            "  {} {}",
            label("enable_feedback_loop"),
            config.enable_feedback_loop
        ));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `show`: load, validate, print the redacted configuration
pub fn execute(args: ShowArgs, json_mode: bool) -> Result<()> {
    let config = Config::initialize(&args.path)?;
    let view = ShowOutput {
        config: config.get().redacted(),
    };
    output(&view, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ConfigLoader;

    const DOC: &str = r#"
data_sources:
  seismic: {path: /data/seismic, format: segy}
  well_logs: {}
  historical: {path: /data/historical}
  external_apis: {weather: "https://api.weather.com"}
seismic_agent: {path: /models/seismic, version: 1.0.0}
drilling_agent: {path: /models/drilling, version: 1.2.0, device: cpu}
api:
  port: 9000
  api_keys: {client1: abc123}
"#;

    fn view() -> ShowOutput {
        let config = ConfigLoader::load_str(DOC, "show.yaml").unwrap();
        ShowOutput {
            config: config.redacted(),
        }
    }

    #[test]
    fn test_json_view_redacts_keys() {
        let json = view().to_json();
        assert_eq!(json["api"]["port"], 9000);
        assert_eq!(json["api"]["api_keys"]["client1"], "[REDACTED]");
        assert_eq!(json["data_sources"]["seismic"]["format"], "segy");
        assert_eq!(json["drilling_agent"]["device"], "cpu");
        assert_eq!(
            json["data_sources"]["external_apis"]["weather"],
            "https://api.weather.com"
        );
    }

    #[test]
    fn test_human_view_lists_sections() {
        let text = view().to_human();
        assert!(text.contains("path = /data/seismic"));
        assert!(text.contains("(empty)"));
        assert!(text.contains("0.0.0.0:9000"));
        assert!(text.contains("client1"));
        assert!(!text.contains("abc123"));
    }
}
