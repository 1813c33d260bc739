//! Default values for every configuration section.

use crate::schema::{PollingConfig, PracticumConfig, TelegramConfig};
use homework_i18n::Locale;

/// Practicum homework statuses endpoint.
pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Telegram Bot API base URL.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Seconds between poll cycles.
pub const DEFAULT_INTERVAL_SECONDS: u64 = 600;

/// Seconds before an outbound request is abandoned.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl Default for PracticumConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            chat_id: String::new(),
            api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: DEFAULT_INTERVAL_SECONDS,
            notify_on_no_updates: false,
            language: Locale::Russian,
        }
    }
}
