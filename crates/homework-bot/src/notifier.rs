//! Chat delivery of status messages.

use async_trait::async_trait;
use homework_common::{mask_secret, ChatId, HomeworkError, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Something that can deliver a text message to the configured chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers `text`, reporting any failure.
    async fn send(&self, text: &str) -> Result<()>;

    /// Delivers `text` and reports whether it arrived.
    ///
    /// Failures are logged and swallowed: a broken chat must never stop the
    /// poll loop.
    async fn notify(&self, text: &str) -> bool {
        debug!("Sending message: {}", text);
        match self.send(text).await {
            Ok(()) => {
                debug!("Message sent: {}", text);
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to send message");
                false
            }
        }
    }
}

/// Bot API reply envelope; only the fields used for error reporting.
#[derive(Debug, Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages through the Telegram Bot API `sendMessage` method.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    send_url: Url,
    chat_id: ChatId,
}

impl TelegramNotifier {
    /// Creates a notifier posting to `<api_url>/bot<token>/sendMessage`.
    pub fn new(api_url: &str, token: &str, chat_id: ChatId, timeout: Duration) -> Result<Self> {
        let send_url = Url::parse(&format!(
            "{}/bot{token}/sendMessage",
            api_url.trim_end_matches('/')
        ))
        .map_err(|e| HomeworkError::config(format!("Invalid Telegram API URL '{api_url}': {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HomeworkError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            client,
            send_url,
            chat_id,
        })
    }

    /// Destination chat.
    pub const fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("send_url", &mask_secret(self.send_url.as_str()))
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[instrument(skip(self, text), fields(chat_id = %self.chat_id))]
    async fn send(&self, text: &str) -> Result<()> {
        let body = json!({
            "chat_id": self.chat_id.as_str(),
            "text": text,
        });

        // The request URL embeds the bot token, so it is stripped from errors.
        let response = self
            .client
            .post(self.send_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| HomeworkError::notification_with_source("Telegram request failed", e.without_url()))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            HomeworkError::notification_with_source("Failed to read Telegram response", e.without_url())
        })?;

        let reply: Option<ApiReply> = serde_json::from_str(&text).ok();
        match reply {
            Some(ApiReply { ok: true, .. }) if status.is_success() => Ok(()),
            Some(ApiReply { description, .. }) => Err(HomeworkError::notification(format!(
                "Telegram returned {status}: {}",
                description.unwrap_or_else(|| "no description".to_string())
            ))),
            None => Err(HomeworkError::notification(format!(
                "Telegram returned {status} with an unreadable body"
            ))),
        }
    }
}
