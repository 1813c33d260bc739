//! Configuration loading utilities

use crate::schema::Config;
use crate::validator::{
    missing_credentials, PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR,
};
use homework_common::HomeworkError;
use homework_i18n::Locale;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable that points at an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "HOMEWORK_BOT_CONFIG";

/// File names probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 2] = ["config.yaml", "config.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// One or more required credentials are absent or empty
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<String>),
}

impl From<ConfigError> for HomeworkError {
    fn from(err: ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the process environment.
    ///
    /// The file is taken from `path`, then `HOMEWORK_BOT_CONFIG`, then
    /// `config.yaml`/`config.yml` in the working directory. Without any file
    /// the built-in defaults are used. Environment variables override file
    /// values in every case.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        Self::load_with(path, |var| env::var(var).ok())
    }

    /// Same as [`ConfigLoader::load`], reading variables through `lookup`.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match Self::resolve_path(path, &lookup) {
            Some(path) => Self::read_file(&path)?,
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config, &lookup)?;

        let missing = missing_credentials(&config);
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        config.validate_all()?;

        info!(
            "Configuration loaded: endpoint={}, interval={}s, language={}",
            config.practicum.endpoint, config.polling.interval_seconds, config.polling.language
        );
        Ok(config)
    }

    /// Parses configuration from YAML text without overrides or validation.
    pub fn from_yaml(content: &str) -> Result<Config, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    fn resolve_path<F>(explicit: Option<&Path>, lookup: &F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(path) = non_empty(lookup(CONFIG_PATH_VAR)) {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| candidate.exists())
    }

    fn read_file(path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides<F>(config: &mut Config, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Practicum
        if let Some(token) = lookup(PRACTICUM_TOKEN_VAR) {
            config.practicum.token = token;
        }
        if let Some(endpoint) = non_empty(lookup("PRACTICUM_ENDPOINT")) {
            config.practicum.endpoint = endpoint;
        }
        if let Some(timeout) = parse_var(lookup, "PRACTICUM_TIMEOUT")? {
            config.practicum.timeout_seconds = timeout;
        }

        // Telegram
        if let Some(token) = lookup(TELEGRAM_TOKEN_VAR) {
            config.telegram.token = token;
        }
        if let Some(chat_id) = lookup(TELEGRAM_CHAT_ID_VAR) {
            config.telegram.chat_id = chat_id;
        }
        if let Some(api_url) = non_empty(lookup("TELEGRAM_API_URL")) {
            config.telegram.api_url = api_url;
        }
        if let Some(timeout) = parse_var(lookup, "TELEGRAM_TIMEOUT")? {
            config.telegram.timeout_seconds = timeout;
        }

        // Polling
        if let Some(interval) = parse_var(lookup, "POLL_INTERVAL")? {
            config.polling.interval_seconds = interval;
        }
        if let Some(notify) = parse_var::<bool, _>(lookup, "NOTIFY_ON_NO_UPDATES")? {
            config.polling.notify_on_no_updates = notify;
        }
        if let Some(language) = parse_var::<Locale, _>(lookup, "BOT_LANGUAGE")? {
            config.polling.language = language;
        }

        Ok(())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses an optional variable; unset and blank values leave the current value.
fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup(var))
        .map(|raw| {
            raw.trim()
                .to_ascii_lowercase()
                .parse()
                .map_err(|e| ConfigError::EnvParseError {
                    var: var.to_string(),
                    source: Box::new(e),
                })
        })
        .transpose()
}
