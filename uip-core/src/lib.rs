//! Unique IP Solutions Core - Foundation types, error handling, configuration,
//! and logging.
//!
//! This crate provides the shared foundation used by all other crates in the
//! workspace:
//! - Application configuration (store endpoint, access key, display settings)
//! - Global error types covering all error categories
//! - Structured logging with tracing
//! - Platform directory resolution
//! - Common constants (table names, timings, site contact details)

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod paths;

// Re-export commonly used items at the crate root
pub use config::{AppConfig, ConfigHandle, StoreConfig};
pub use error::{UipError, UipResult};
pub use logging::init_logging;
