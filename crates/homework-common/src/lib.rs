//! # Homework Common
//!
//! Shared types, errors, and logging setup for the homework status bot.
//!
//! This crate provides the foundational pieces used across all other crates in
//! the workspace: the poll-cycle error taxonomy, the cursor and chat id
//! newtypes, and the tracing subscriber bootstrap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{json_type_name, HomeworkError, PayloadError, Result};
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use types::*;
pub use utils::*;
