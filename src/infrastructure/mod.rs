//! Infrastructure layer module
//!
//! Filesystem- and process-facing adapters:
//! - Configuration loading and validation
//! - Logging infrastructure

pub mod config;
pub mod logging;
