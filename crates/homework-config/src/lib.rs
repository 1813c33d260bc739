//! # Homework Config
//!
//! Configuration management for the homework status bot.
//!
//! Settings come from an optional YAML file and are overridden by environment
//! variables. The three credentials (`PRACTICUM_TOKEN`, `TELEGRAM_TOKEN`,
//! `TELEGRAM_CHAT_ID`) are required; everything else has a default.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use self::defaults::*;
pub use self::loader::*;
pub use self::schema::*;
pub use self::validator::*;
