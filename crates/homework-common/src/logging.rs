//! Structured logging infrastructure for the homework bot

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "homework_bot=trace")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to use ANSI colors on the console
    pub ansi: bool,
    /// Whether to include source file and line number
    pub include_location: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            ansi: true,
            include_location: true,
            include_targets: true,
        }
    }
}

/// Error raised when the global subscriber cannot be installed
#[derive(Debug, thiserror::Error)]
#[error("Failed to initialize logging: {0}")]
pub struct LoggingError(String);

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_new(&config.level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| LoggingError(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json_format {
        let layer = fmt::layer()
            .json()
            .with_target(config.include_targets)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        registry
            .with(layer)
            .try_init()
            .map_err(|e| LoggingError(e.to_string()))
    } else {
        let layer = fmt::layer()
            .with_ansi(config.ansi)
            .with_target(config.include_targets)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        registry
            .with(layer)
            .try_init()
            .map_err(|e| LoggingError(e.to_string()))
    }
}
