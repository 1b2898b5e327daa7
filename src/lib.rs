//! Oil Exploration - runtime configuration for the exploration agent platform
//!
//! Loads, validates and exposes the strongly-typed configuration shared by
//! the seismic and drilling agents, the data ingestion side and the API
//! server, and sets up structured, rotating log output.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): typed configuration records and violation types
//! - **Infrastructure Layer** (`infrastructure`): YAML loading, schema validation,
//!   the configuration facade and logging
//! - **CLI Layer** (`cli`): `check` and `show` commands
//!
//! # Example
//!
//! ```no_run
//! use oil_exploration::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::initialize("config/system.yaml")?;
//!     println!("serving on {}", config.get().api.bind_address());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{SchemaValidationError, Violation, ViolationKind};
pub use domain::models::{
    ApiConfig, ConfigMap, ConfigValue, DataSourceConfig, ModelConfig, SystemConfig,
};
pub use infrastructure::config::{Config, ConfigError, ConfigErrorKind, ConfigLoader};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};
