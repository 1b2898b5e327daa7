//! Configuration management infrastructure
//!
//! Loads the system configuration from a single YAML file:
//! - File reading with failure classification
//! - YAML parsing into an untyped tree
//! - Schema validation with default filling
//! - Immutable facade for collaborators

pub mod error;
pub mod facade;
pub mod loader;
pub mod schema;

pub use error::{ConfigError, ConfigErrorKind};
pub use facade::Config;
pub use loader::ConfigLoader;
