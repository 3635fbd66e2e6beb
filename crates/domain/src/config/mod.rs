//! Configuration module for zonediff
//!
//! - `root`: Main configuration and CLI overrides
//! - `query`: Query timeouts and answer normalization
//! - `output`: Diff rendering
//! - `pacing`: Delay between records
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod pacing;
pub mod query;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use pacing::PacingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};
