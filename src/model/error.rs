//! Error types for the rhymefinder application.
//!
//! Errors are structured with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`ConfigError`] - config file could not be read or parsed
//!   - [`LoggingError`] - tracing subscriber could not be set up
//!   - `std::io::Error` - terminal failures
//!
//! The scroll geometry itself never fails: degenerate containers have a
//! defined result instead of an error.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All variants are fatal: they are reported on stderr after the terminal
/// has been restored.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but is unusable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be opened or the subscriber was already set.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
