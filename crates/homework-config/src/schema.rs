//! Configuration schema definitions using serde with validation attributes.

use homework_common::mask_secret;
use homework_i18n::Locale;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;
use validator::{Validate, ValidationErrors};

/// Main configuration structure for the homework bot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Practicum API configuration.
    #[validate]
    pub practicum: PracticumConfig,
    /// Telegram delivery configuration.
    #[validate]
    pub telegram: TelegramConfig,
    /// Poll loop configuration.
    #[validate]
    pub polling: PollingConfig,
}

/// Practicum homework-status API configuration.
#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PracticumConfig {
    /// OAuth token sent in the `Authorization` header.
    pub token: String,
    /// Homework statuses endpoint.
    #[validate(url(message = "Practicum endpoint must be a valid URL"))]
    pub endpoint: String,
    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

/// Telegram Bot API configuration.
#[derive(Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot token issued by BotFather.
    pub token: String,
    /// Destination chat for every notification.
    #[serde(deserialize_with = "string_or_number")]
    pub chat_id: String,
    /// Bot API base URL.
    #[validate(url(message = "Telegram API URL must be a valid URL"))]
    pub api_url: String,
    /// Request timeout in seconds.
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

/// Poll loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PollingConfig {
    /// Pause between the end of one poll cycle and the start of the next.
    #[validate(range(min = 1, max = 86_400, message = "Interval must be between 1 and 86400 seconds"))]
    pub interval_seconds: u64,
    /// Whether a cycle without updates also sends a chat message.
    pub notify_on_no_updates: bool,
    /// Language of the notification texts.
    pub language: Locale,
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        crate::validator::check_timeouts_below_interval(self, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl PracticumConfig {
    /// Request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl TelegramConfig {
    /// Request timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl PollingConfig {
    /// Poll interval as a [`Duration`].
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

impl fmt::Debug for PracticumConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticumConfig")
            .field("token", &mask_secret(&self.token))
            .field("endpoint", &self.endpoint)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("token", &mask_secret(&self.token))
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Accepts chat ids written either as YAML strings or as bare integers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
