//! Domain errors for configuration validation.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Path label used for violations at the document root.
pub const ROOT_PATH: &str = "<root>";

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    /// A required field is absent.
    Missing,
    /// The value has the wrong shape or scalar type.
    TypeMismatch {
        /// Type the schema requires
        expected: String,
        /// Type actually present
        found: String,
    },
    /// Numeric value does not fit the field's type.
    OutOfRange {
        /// Accepted range
        expected: String,
        /// Offending value as written
        value: String,
    },
    /// Mapping key is not a string.
    NonStringKey {
        /// Offending key, rendered
        key: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("field required"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::OutOfRange { expected, value } => {
                write!(f, "value {value} out of range, expected {expected}")
            }
            Self::NonStringKey { key } => write!(f, "mapping key {key} is not a string"),
        }
    }
}

/// One (field-path, reason) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Dot-joined field path, e.g. `seismic_agent.path`
    pub path: String,
    /// What is wrong with it
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    /// Violation at `path`
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Human-readable reason
    pub fn reason(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every schema violation found in a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} schema violation(s):\n{}", .violations.len(), format_violations(.violations))]
pub struct SchemaValidationError {
    /// Never empty
    pub violations: Vec<Violation>,
}

impl SchemaValidationError {
    /// True if any violation is reported at exactly `path`
    pub fn mentions(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }
}
