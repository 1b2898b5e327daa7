//! Configuration loading errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::errors::{SchemaValidationError, Violation};

/// Boxed cause for failures that fit no other category
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Configuration loading errors
///
/// Every failure leaving [`super::ConfigLoader`] is exactly one of these.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found or unreadable: {}", .path.display())]
    NotFound {
        /// Requested file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in config file {}{}: {message}", .path.display(), format_location(.line, .column))]
    Parse {
        /// Source file or label
        path: PathBuf,
        /// Parser message
        message: String,
        /// 1-based line, when the parser reports one
        line: Option<usize>,
        /// 1-based column, when the parser reports one
        column: Option<usize>,
    },

    #[error("Configuration validation failed for {}: {source}", .path.display())]
    Validation {
        /// Source file or label
        path: PathBuf,
        /// Every violation found
        #[source]
        source: SchemaValidationError,
    },

    #[error("Unexpected error loading config {}: {source}", .path.display())]
    Load {
        /// Source file
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: BoxError,
    },
}

/// Discriminant of [`ConfigError`] for callers that only branch on the category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// Missing or unreadable file
    NotFound,
    /// Malformed YAML
    Parse,
    /// Schema violations
    Validation,
    /// Anything else
    Load,
}

fn format_location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (*line, *column) {
        (Some(line), Some(column)) => format!(" at line {line}, column {column}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

impl ConfigError {
    /// Failure category
    pub const fn kind(&self) -> ConfigErrorKind {
        match self {
            Self::NotFound { .. } => ConfigErrorKind::NotFound,
            Self::Parse { .. } => ConfigErrorKind::Parse,
            Self::Validation { .. } => ConfigErrorKind::Validation,
            Self::Load { .. } => ConfigErrorKind::Load,
        }
    }

    /// Source the failure relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path, .. }
            | Self::Parse { path, .. }
            | Self::Validation { path, .. }
            | Self::Load { path, .. } => path,
        }
    }

    /// Schema violations, empty unless this is a validation failure
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation { source, .. } => &source.violations,
            _ => &[],
        }
    }

    pub(crate) fn parse(path: PathBuf, err: &serde_yaml::Error) -> Self {
        let location = err.location();
        Self::Parse {
            path,
            message: err.to_string(),
            line: location.as_ref().map(serde_yaml::Location::line),
            column: location.as_ref().map(serde_yaml::Location::column),
        }
    }
}
