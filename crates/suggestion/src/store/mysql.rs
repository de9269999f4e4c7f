//! MySQL implementation of [`SuggestionStore`].

use sqlx::Row;
use sqlx::mysql::MySqlPool;

use super::{StoreError, SuggestionStore};
use crate::ranking::SuggestionEntry;

// =============================================================================
// MySqlSuggestionStore
// =============================================================================

/// MySQL-backed suggestion store.
///
/// The `task_suggestions` table keys rows by task text, so the upsert is a
/// single `INSERT ... ON DUPLICATE KEY UPDATE` and concurrent increments
/// resolve inside the database.
#[derive(Clone)]
pub struct MySqlSuggestionStore {
    pool: MySqlPool,
}

impl MySqlSuggestionStore {
    #[must_use]
    pub const fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub const fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

// =============================================================================
// SuggestionStore Implementation
// =============================================================================

impl SuggestionStore for MySqlSuggestionStore {
    fn upsert_increment(
        &self,
        task_text: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send {
        let pool = self.pool.clone();
        let task_text = task_text.to_string();

        async move {
            sqlx::query(
                r"
                INSERT INTO task_suggestions (task_text, frequency)
                VALUES (?, 1)
                ON DUPLICATE KEY UPDATE frequency = frequency + 1
                ",
            )
            .bind(&task_text)
            .execute(&pool)
            .await?;

            Ok(())
        }
    }

    fn search_by_contains(
        &self,
        substring: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<SuggestionEntry>, StoreError>> + Send {
        let pool = self.pool.clone();
        let pattern = format!("%{substring}%");

        async move {
            let rows = sqlx::query(
                r"
                SELECT task_text, frequency
                FROM task_suggestions
                WHERE task_text LIKE ?
                ORDER BY frequency DESC
                LIMIT ?
                ",
            )
            .bind(&pattern)
            .bind(limit)
            .fetch_all(&pool)
            .await?;

            let entries = rows
                .iter()
                .map(|row| SuggestionEntry {
                    task_text: row.get("task_text"),
                    frequency: row.get::<u64, _>("frequency"),
                })
                .collect();

            Ok(entries)
        }
    }
}
