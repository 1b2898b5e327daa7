//! Typed configuration records.

pub mod config;
pub mod value;

pub use config::{ApiConfig, DataSourceConfig, ModelConfig, SystemConfig, REDACTED};
pub use value::{ConfigMap, ConfigValue};
