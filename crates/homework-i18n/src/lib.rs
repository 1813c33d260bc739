//! # Homework I18n
//!
//! Localized notification texts for the homework status bot, backed by the
//! Fluent localization system.
//!
//! The catalogues under `locales/` are embedded into the binary and checked by
//! the build script, so every supported locale is guaranteed to define the same
//! messages with the same placeables.
//!
//! ```
//! use homework_i18n::{Locale, Messages};
//!
//! let text = Messages::get(Locale::English, "verdict-reviewing");
//! assert_eq!(text, "The work has been taken for review.");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bundle;
pub mod error;
pub mod locale;

pub use bundle::Messages;
pub use error::{I18nError, I18nResult};
pub use locale::Locale;

/// Message keys defined by every locale catalogue.
pub mod keys {
    /// Homework review status changed; takes `name` and `verdict`.
    pub const STATUS_CHANGED: &str = "homework-status-changed";
    /// Verdict text for an approved homework.
    pub const VERDICT_APPROVED: &str = "verdict-approved";
    /// Verdict text for a homework under review.
    pub const VERDICT_REVIEWING: &str = "verdict-reviewing";
    /// Verdict text for a homework returned with comments.
    pub const VERDICT_REJECTED: &str = "verdict-rejected";
    /// Nothing changed since the last poll.
    pub const NO_NEW_STATUS: &str = "no-new-status";
    /// A poll cycle failed; takes `error`.
    pub const PROGRAM_FAILURE: &str = "program-failure";
}
