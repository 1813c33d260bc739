//! Application-wide error types using thiserror.

use homework_common::{HomeworkError, LoggingError};
use homework_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A component could not be built from the configuration.
    #[error(transparent)]
    Homework(#[from] HomeworkError),

    /// The tracing subscriber could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
