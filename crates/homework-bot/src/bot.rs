//! Wiring of the production components from configuration.

use crate::error::BotResult;
use crate::notifier::TelegramNotifier;
use crate::poller::{CycleOutcome, Poller};
use homework_api::{ClientConfig, PracticumClient, StatusFormatter};
use homework_common::ChatId;
use homework_config::Config;
use tracing::info;

/// The bot as deployed: Practicum in, Telegram out.
pub struct HomeworkBot {
    poller: Poller<PracticumClient, TelegramNotifier>,
}

impl HomeworkBot {
    /// Builds the client, notifier and poller described by `config`.
    pub fn from_config(config: &Config) -> BotResult<Self> {
        let source = PracticumClient::new(
            ClientConfig::new(&config.practicum.endpoint, &config.practicum.token)
                .with_timeout(config.practicum.timeout()),
        )?;

        let notifier = TelegramNotifier::new(
            &config.telegram.api_url,
            &config.telegram.token,
            ChatId(config.telegram.chat_id.clone()),
            config.telegram.timeout(),
        )?;

        let poller = Poller::new(
            source,
            notifier,
            StatusFormatter::new(config.polling.language),
            config.polling.interval(),
        )
        .with_notify_on_no_updates(config.polling.notify_on_no_updates);

        info!(
            "Bot configured for chat {} ({})",
            config.telegram.chat_id, config.polling.language
        );
        Ok(Self { poller })
    }

    /// Runs a single poll cycle.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.poller.run_cycle().await
    }

    /// Polls until the task is dropped.
    pub async fn run(mut self) {
        self.poller.run().await;
    }

    /// The underlying poller.
    pub const fn poller(&self) -> &Poller<PracticumClient, TelegramNotifier> {
        &self.poller
    }
}
