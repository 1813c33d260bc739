//! # Homework Bot
//!
//! Polls the Practicum homework statuses API and reports review status
//! changes to a Telegram chat.
//!
//! This is the main binary crate that wires the API client, the Telegram
//! notifier and the poll loop together.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;
pub mod notifier;
pub mod poller;

pub use bot::*;
pub use error::*;
pub use notifier::*;
pub use poller::*;
