//! Suggestion store port and adapters.
//!
//! The store maps normalized task text to a monotonically incremented
//! frequency counter. Entries are never decremented or deleted.

pub mod memory;
pub mod mysql;

use thiserror::Error;

use crate::ranking::SuggestionEntry;

// =============================================================================
// StoreError
// =============================================================================

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("database error: {message}")]
    Database { message: String },
}

impl StoreError {
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::database(error.to_string())
    }
}

// =============================================================================
// SuggestionStore Port
// =============================================================================

/// Keyed-record store for suggestion frequencies.
///
/// Keys are normalized task text; callers must normalize before calling.
pub trait SuggestionStore: Send + Sync + 'static {
    /// Inserts the text with frequency 1, or increments the existing counter.
    fn upsert_increment(
        &self,
        task_text: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns entries whose text contains `substring`, ordered by
    /// descending frequency, at most `limit` of them.
    fn search_by_contains(
        &self,
        substring: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<SuggestionEntry>, StoreError>> + Send;
}
