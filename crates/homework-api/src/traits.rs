//! Source trait definitions for polymorphic homework status providers.

use async_trait::async_trait;
use homework_common::{Cursor, Result};
use serde_json::Value;

/// Trait for anything that can report homework status updates.
///
/// The poll loop only depends on this trait, so tests drive it with scripted
/// responses instead of a live endpoint.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches the raw status payload for updates made since `cursor`.
    async fn fetch(&self, cursor: Cursor) -> Result<Value>;

    /// Gets the name of this source for logging.
    fn name(&self) -> &'static str;
}
