//! Shared application state for the suggestion service.

use std::sync::Arc;

use crate::store::SuggestionStore;

// =============================================================================
// AppState
// =============================================================================

pub struct AppState<Store>
where
    Store: SuggestionStore,
{
    pub store: Arc<Store>,
}

impl<Store> AppState<Store>
where
    Store: SuggestionStore,
{
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

// Manual impl: deriving Clone would require `Store: Clone`, which the Arc
// makes unnecessary.
impl<Store> Clone for AppState<Store>
where
    Store: SuggestionStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
