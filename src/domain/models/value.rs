//! Untyped configuration values
//!
//! Open-ended configuration sections (data source descriptors, external API
//! endpoints) carry arbitrary nested data. Rather than exposing the parser's
//! own tree type, they are stored as [`ConfigValue`], a small tagged union
//! that collaborators can match on.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from string key to untyped value
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single untyped configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Explicit `null` or `~`
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Any integer that fits `i64`
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    /// Floating point number
    Float(f64),
    /// Any string scalar
    String(String),
    /// Ordered list
    Sequence(Vec<ConfigValue>),
    /// Nested string-keyed mapping
    Mapping(ConfigMap),
}

impl ConfigValue {
    /// String contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean value, if this is a boolean
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Signed view of an integer; `None` for floats and values above `i64::MAX`
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Unsigned view of a non-negative integer
    #[allow(clippy::cast_sign_loss)]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(i) if *i >= 0 => Some(*i as u64),
            Self::Unsigned(u) => Some(*u),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Unsigned(u) => Some(*u as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Items, if this is a sequence
    pub const fn as_sequence(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Entries, if this is a mapping
    pub const fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Unsigned(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Mapping(map) => {
                f.write_str("{")?;
                for (idx, (key, value)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
