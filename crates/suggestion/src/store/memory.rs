//! In-memory implementation of [`SuggestionStore`].
//!
//! Used by tests and local development runs that have no MySQL available.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{StoreError, SuggestionStore};
use crate::ranking::SuggestionEntry;

// =============================================================================
// InMemorySuggestionStore
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemorySuggestionStore {
    entries: Arc<RwLock<HashMap<String, u64>>>,
}

impl InMemorySuggestionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct stored texts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().map(|map| map.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frequency for an exact (normalized) text, if present.
    #[must_use]
    pub fn frequency_of(&self, task_text: &str) -> Option<u64> {
        self.entries
            .read()
            .ok()
            .and_then(|map| map.get(task_text).copied())
    }
}

// =============================================================================
// SuggestionStore Implementation
// =============================================================================

impl SuggestionStore for InMemorySuggestionStore {
    fn upsert_increment(
        &self,
        task_text: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        let entries = Arc::clone(&self.entries);
        let task_text = task_text.to_string();

        async move {
            let mut map = entries
                .write()
                .map_err(|_| StoreError::database("suggestion map lock poisoned"))?;
            *map.entry(task_text).or_insert(0) += 1;
            Ok(())
        }
    }

    fn search_by_contains(
        &self,
        substring: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<SuggestionEntry>, StoreError>> + Send {
        let entries = Arc::clone(&self.entries);
        let substring = substring.to_string();

        async move {
            let map = entries
                .read()
                .map_err(|_| StoreError::database("suggestion map lock poisoned"))?;

            let mut matches: Vec<SuggestionEntry> = map
                .iter()
                .filter(|(text, _)| text.contains(&substring))
                .map(|(text, frequency)| SuggestionEntry::new(text.clone(), *frequency))
                .collect();

            matches.sort_by(|left, right| {
                right
                    .frequency
                    .cmp(&left.frequency)
                    .then_with(|| left.task_text.cmp(&right.task_text))
            });
            matches.truncate(limit as usize);

            Ok(matches)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn upsert_creates_then_increments() {
        let store = InMemorySuggestionStore::new();

        store.upsert_increment("buy milk").await.unwrap();
        store.upsert_increment("buy milk").await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.frequency_of("buy milk"), Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn search_orders_by_frequency_and_respects_limit() {
        let store = InMemorySuggestionStore::new();

        for _ in 0..3 {
            store.upsert_increment("buy milk").await.unwrap();
        }
        store.upsert_increment("buy bread").await.unwrap();
        store.upsert_increment("walk the dog").await.unwrap();

        let results = store.search_by_contains("buy", 10).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0], SuggestionEntry::new("buy milk", 3));
        assert_eq!(results[1], SuggestionEntry::new("buy bread", 1));

        let limited = store.search_by_contains("buy", 1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn search_with_empty_substring_matches_everything() {
        let store = InMemorySuggestionStore::new();

        store.upsert_increment("buy milk").await.unwrap();
        store.upsert_increment("walk the dog").await.unwrap();

        let results = store.search_by_contains("", 10).await.unwrap();
        assert_eq!(results.len(), 2);
    }
}
