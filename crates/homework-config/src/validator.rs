//! Checks that span more than one field and cannot be expressed as derive
//! attributes.

use crate::schema::Config;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Environment variable holding the Practicum OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Names of the required credentials that are absent or empty, in the order
/// `PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`, `TELEGRAM_CHAT_ID`.
pub fn missing_credentials(config: &Config) -> Vec<String> {
    [
        (PRACTICUM_TOKEN_VAR, &config.practicum.token),
        (TELEGRAM_TOKEN_VAR, &config.telegram.token),
        (TELEGRAM_CHAT_ID_VAR, &config.telegram.chat_id),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name.to_string())
    .collect()
}

/// A request must give up before the next poll is due, otherwise one stalled
/// connection delays every later cycle.
///
/// Errors go under their own keys; the section keys already hold the nested
/// struct errors and cannot take field errors.
pub fn check_timeouts_below_interval(config: &Config, errors: &mut ValidationErrors) {
    let interval = config.polling.interval_seconds;

    if config.practicum.timeout_seconds >= interval {
        errors.add("practicum_timeout", timeout_error(config.practicum.timeout_seconds, interval));
    }
    if config.telegram.timeout_seconds >= interval {
        errors.add("telegram_timeout", timeout_error(config.telegram.timeout_seconds, interval));
    }
}

fn timeout_error(timeout: u64, interval: u64) -> ValidationError {
    let mut error = ValidationError::new("timeout_not_below_interval");
    error.message = Some(Cow::Owned(format!(
        "request timeout ({timeout}s) must be shorter than the poll interval ({interval}s)"
    )));
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_credentials() -> Config {
        let mut config = Config::default();
        config.practicum.token = "practicum".to_string();
        config.telegram.token = "telegram".to_string();
        config.telegram.chat_id = "42".to_string();
        config
    }

    #[test]
    fn test_no_missing_credentials() {
        assert!(missing_credentials(&config_with_credentials()).is_empty());
    }

    #[test]
    fn test_all_credentials_missing_in_fixed_order() {
        assert_eq!(
            missing_credentials(&Config::default()),
            vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"]
        );
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut config = config_with_credentials();
        config.telegram.token = "   ".to_string();
        assert_eq!(missing_credentials(&config), vec!["TELEGRAM_TOKEN"]);
    }

    #[test]
    fn test_timeout_equal_to_interval_is_rejected() {
        let mut config = config_with_credentials();
        config.polling.interval_seconds = 30;
        config.practicum.timeout_seconds = 30;
        config.telegram.timeout_seconds = 10;

        let mut errors = ValidationErrors::new();
        check_timeouts_below_interval(&config, &mut errors);

        let fields = errors.field_errors();
        assert!(fields.contains_key("practicum_timeout"));
        assert!(!fields.contains_key("telegram_timeout"));
    }

    #[test]
    fn test_default_timeouts_fit_default_interval() {
        let mut errors = ValidationErrors::new();
        check_timeouts_below_interval(&config_with_credentials(), &mut errors);
        assert!(errors.is_empty());
    }
}
