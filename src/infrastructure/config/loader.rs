//! Reading, parsing and validating the configuration file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use super::error::ConfigError;
use super::schema;
use crate::domain::models::SystemConfig;

/// Single-shot configuration loader
///
/// Reads one YAML document, validates it and classifies every failure as
/// [`ConfigError::NotFound`], [`ConfigError::Parse`],
/// [`ConfigError::Validation`] or [`ConfigError::Load`]. Each failure is
/// logged once at error level before it is returned. No retries.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the configuration file at `path`
    ///
    /// # Errors
    /// See [`ConfigError`] for the failure categories.
    pub fn load(path: impl AsRef<Path>) -> Result<SystemConfig, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading configuration");

        let content = match read_source(path) {
            Ok(content) => content,
            Err(err) => {
                let err = classify_read_error(path.to_path_buf(), err);
                log_failure(&err);
                return Err(err);
            }
        };

        Self::load_str(&content, path)
    }

    /// Parse and validate in-memory YAML; `origin` labels errors and logs
    ///
    /// # Errors
    /// [`ConfigError::Parse`] or [`ConfigError::Validation`].
    pub fn load_str(content: &str, origin: impl AsRef<Path>) -> Result<SystemConfig, ConfigError> {
        let origin = origin.as_ref();

        let result = parse_document(content)
            .map_err(|err| ConfigError::parse(origin.to_path_buf(), &err))
            .and_then(|document| {
                schema::validate(&document).map_err(|source| ConfigError::Validation {
                    path: origin.to_path_buf(),
                    source,
                })
            });

        match result {
            Ok(config) => {
                debug!(path = %origin.display(), "configuration validated");
                Ok(config)
            }
            Err(err) => {
                log_failure(&err);
                Err(err)
            }
        }
    }
}

/// Parse one YAML document and resolve `<<` merge keys.
fn parse_document(content: &str) -> Result<serde_yaml::Value, serde_yaml::Error> {
    let mut document: serde_yaml::Value = serde_yaml::from_str(content)?;
    document.apply_merge()?;
    Ok(document)
}

/// Read the whole source; the handle is closed when this returns.
fn read_source(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Undecodable content is not a missing/unreadable source.
fn classify_read_error(path: PathBuf, err: io::Error) -> ConfigError {
    if err.kind() == io::ErrorKind::InvalidData {
        ConfigError::Load {
            path,
            source: Box::new(err),
        }
    } else {
        ConfigError::NotFound { path, source: err }
    }
}

fn log_failure(err: &ConfigError) {
    match err {
        ConfigError::NotFound { path, source } => {
            error!(path = %path.display(), error = %source, "configuration file not found");
        }
        ConfigError::Parse {
            path,
            message,
            line,
            column,
        } => {
            error!(
                path = %path.display(),
                line = *line,
                column = *column,
                error = %message,
                "invalid YAML in config file"
            );
        }
        ConfigError::Validation { path, source } => {
            let violations: Vec<String> =
                source.violations.iter().map(ToString::to_string).collect();
            error!(
                path = %path.display(),
                count = violations.len(),
                violations = ?violations,
                "configuration validation failed"
            );
        }
        ConfigError::Load { path, source } => {
            error!(path = %path.display(), error = %source, "unexpected error loading config");
        }
    }
}
