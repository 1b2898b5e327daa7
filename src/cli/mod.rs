//! Command-line interface
//!
//! Thin collaborator over the configuration facade: `check` validates a file,
//! `show` prints it with API keys redacted.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use console::style;

use crate::infrastructure::config::{ConfigError, ConfigErrorKind};

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ConfigError>().map(ConfigError::kind) {
        Some(ConfigErrorKind::NotFound) => 2,
        Some(ConfigErrorKind::Parse) => 3,
        Some(ConfigErrorKind::Validation) => 4,
        Some(ConfigErrorKind::Load) | None => 1,
    }
}

/// Report a command failure and return the exit code to use
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> i32 {
    let config_error = err.downcast_ref::<ConfigError>();

    if json_mode {
        let body = serde_json::json!({
            "error": config_error.map_or("error", |e| kind_name(e.kind())),
            "message": err.to_string(),
            "violations": config_error.map(ConfigError::violations).unwrap_or_default(),
        });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err}", style("Error:").red().bold());
        // Validation errors already list every violation in their message
        if config_error.is_none() {
            for cause in err.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
        }
    }

    exit_code(err)
}

const fn kind_name(kind: ConfigErrorKind) -> &'static str {
    match kind {
        ConfigErrorKind::NotFound => "config_not_found",
        ConfigErrorKind::Parse => "config_parse",
        ConfigErrorKind::Validation => "config_validation",
        ConfigErrorKind::Load => "config_load",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::SchemaValidationError;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes_by_kind() {
        let not_found = anyhow::Error::new(ConfigError::NotFound {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        let validation = anyhow::Error::new(ConfigError::Validation {
            path: PathBuf::from("bad.yaml"),
            source: SchemaValidationError { violations: vec![] },
        });
        let other = anyhow::anyhow!("boom");

        assert_eq!(exit_code(&not_found), 2);
        assert_eq!(exit_code(&validation), 4);
        assert_eq!(exit_code(&other), 1);
    }
}
