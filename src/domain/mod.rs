//! Domain layer for the exploration platform configuration
//!
//! Typed configuration records and the validation error vocabulary. Nothing
//! here touches the filesystem or the parser.

pub mod errors;
pub mod models;

pub use errors::{SchemaValidationError, Violation, ViolationKind};
