//! Homework review statuses and the chat messages built from them.

use homework_common::{HomeworkError, Result};
use homework_i18n::{keys, Locale, Messages};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Review status of a homework submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    /// Reviewed and accepted
    Approved,
    /// Taken for review
    Reviewing,
    /// Reviewed and returned with comments
    Rejected,
}

impl HomeworkStatus {
    /// Status code as sent by the API.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Catalogue key of the verdict text for this status.
    pub const fn verdict_key(self) -> &'static str {
        match self {
            Self::Approved => keys::VERDICT_APPROVED,
            Self::Reviewing => keys::VERDICT_REVIEWING,
            Self::Rejected => keys::VERDICT_REJECTED,
        }
    }

    /// Localized verdict text.
    pub fn verdict(self, locale: Locale) -> String {
        Messages::get(locale, self.verdict_key())
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(HomeworkError::unexpected_status(other)),
        }
    }
}

/// A homework item with its name and a known status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    /// Name of the submitted work
    pub name: String,
    /// Current review status
    pub status: HomeworkStatus,
}

impl TryFrom<&Value> for Homework {
    type Error = HomeworkError;

    fn try_from(item: &Value) -> Result<Self> {
        let object = item
            .as_object()
            .ok_or_else(|| HomeworkError::wrong_type("homework", "object", item))?;

        let name = required_string(object, "homework_name")?;
        let status = required_string(object, "status")?.parse()?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }
}

fn required_string<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a str> {
    let value = object
        .get(field)
        .ok_or_else(|| HomeworkError::missing_field(field, "homework"))?;
    value
        .as_str()
        .ok_or_else(|| HomeworkError::wrong_type(field, "string", value))
}

/// Builds chat messages in a fixed language.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusFormatter {
    locale: Locale,
}

impl StatusFormatter {
    /// Creates a formatter for `locale`.
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Language of the produced messages.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats the message for the newest homework item.
    ///
    /// `None` stands for "nothing changed" and always succeeds. An item is
    /// checked the same way as [`Homework::try_from`].
    pub fn format(&self, item: Option<&Value>) -> Result<String> {
        match item {
            None => Ok(self.no_updates()),
            Some(item) => Homework::try_from(item).map(|homework| self.status_changed(&homework)),
        }
    }

    /// Message announcing a status change.
    pub fn status_changed(&self, homework: &Homework) -> String {
        let verdict = homework.status.verdict(self.locale);
        Messages::get_with_args(
            self.locale,
            keys::STATUS_CHANGED,
            &[("name", homework.name.as_str()), ("verdict", verdict.as_str())],
        )
    }

    /// Message for a cycle without updates.
    pub fn no_updates(&self) -> String {
        Messages::get(self.locale, keys::NO_NEW_STATUS)
    }

    /// Message reporting a failed poll cycle.
    pub fn failure(&self, error: &HomeworkError) -> String {
        let error = error.to_string();
        Messages::get_with_args(self.locale, keys::PROGRAM_FAILURE, &[("error", error.as_str())])
    }
}
