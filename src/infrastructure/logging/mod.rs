//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON log formatting (pretty optional on stdout)
//! - Size-based log file rotation with numbered backups
//! - Third-party target suppression

pub mod config;
pub mod logger;
pub mod rotation;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use rotation::RotatingFileWriter;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
