//! The poll loop: fetch, check, format, notify, sleep.

use crate::notifier::Notifier;
use homework_api::{check_response, HomeworkSource, StatusFormatter};
use homework_common::{Cursor, HomeworkError, Result};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// What a single poll cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was reported.
    Notified {
        /// Message sent to the chat
        message: String,
        /// Whether the chat accepted it
        delivered: bool,
    },
    /// The response carried no homework items.
    NoUpdates,
    /// The cycle failed; the cursor was left unchanged.
    Failed {
        /// Localized failure message
        message: String,
        /// Whether a chat notification was attempted for it
        notified: bool,
    },
}

/// Drives a [`HomeworkSource`] on a fixed interval and reports to a
/// [`Notifier`].
///
/// The poller owns the cursor and the last reported error. Neither is
/// persisted, so a restart queries from the current time again.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    formatter: StatusFormatter,
    interval: Duration,
    notify_on_no_updates: bool,
    cursor: Cursor,
    last_error: Option<String>,
}

impl<S, N> Poller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    /// Creates a poller starting from the current time.
    pub fn new(source: S, notifier: N, formatter: StatusFormatter, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            formatter,
            interval,
            notify_on_no_updates: false,
            cursor: Cursor::now(),
            last_error: None,
        }
    }

    /// Starts from `cursor` instead of the current time.
    #[must_use]
    pub const fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    /// Also sends the "no new status" message when nothing changed.
    #[must_use]
    pub const fn with_notify_on_no_updates(mut self, enabled: bool) -> Self {
        self.notify_on_no_updates = enabled;
        self
    }

    /// Lower bound of the next query.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The failure message most recently sent to the chat, if the last cycle
    /// failed.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Pause between cycles.
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// The status source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The chat notifier.
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Polls forever, sleeping the full interval after every cycle.
    pub async fn run(&mut self) {
        info!(
            "Polling {} every {}s",
            self.source.name(),
            self.interval.as_secs()
        );
        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs one cycle and never fails; errors are reported through the
    /// notifier at most once per distinct message.
    #[instrument(skip(self), fields(cursor = %self.cursor))]
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.poll().await {
            Ok(outcome) => {
                self.last_error = None;
                outcome
            }
            Err(error) => self.report_failure(&error).await,
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome> {
        let payload = self.source.fetch(self.cursor).await?;
        let response = check_response(&payload)?;

        let outcome = if let Some(item) = response.latest() {
            let message = self.formatter.format(Some(item))?;
            let delivered = self.notifier.notify(&message).await;
            CycleOutcome::Notified { message, delivered }
        } else {
            let message = self.formatter.no_updates();
            debug!("{}", message);
            if self.notify_on_no_updates {
                self.notifier.notify(&message).await;
            }
            CycleOutcome::NoUpdates
        };

        self.cursor = response.next_cursor();
        debug!("Cursor advanced to {}", self.cursor);
        Ok(outcome)
    }

    async fn report_failure(&mut self, error: &HomeworkError) -> CycleOutcome {
        let message = self.formatter.failure(error);
        error!(kind = error.kind(), "{}", message);

        let notified = if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("Same failure already reported, not notifying again");
            false
        } else {
            self.notifier.notify(&message).await;
            self.last_error = Some(message.clone());
            true
        };

        CycleOutcome::Failed { message, notified }
    }
}
