//! Request handlers for the suggestion endpoints.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::{AckResponse, AddSuggestionRequest, HealthResponse, SuggestionQuery};
use crate::errors::ApiError;
use crate::ranking::{self, ScoredSuggestion};
use crate::state::AppState;
use crate::store::SuggestionStore;

/// The store pre-filters to this many frequency-ranked candidates before
/// scoring; ranking then keeps the top [`ranking::MAX_RESULTS`].
const CANDIDATE_LIMIT: u32 = 10;

// =============================================================================
// Get Suggestions Handler
// =============================================================================

pub async fn get_suggestions<Store>(
    State(state): State<AppState<Store>>,
    Query(params): Query<SuggestionQuery>,
) -> Result<Json<Vec<ScoredSuggestion>>, ApiError>
where
    Store: SuggestionStore,
{
    let query = ranking::normalize(params.q.as_deref().unwrap_or(""));

    let candidates = state
        .store
        .search_by_contains(&query, CANDIDATE_LIMIT)
        .await?;

    Ok(Json(ranking::rank(&query, candidates)))
}

// =============================================================================
// Add Suggestion Handler
// =============================================================================

pub async fn add_suggestion<Store>(
    State(state): State<AppState<Store>>,
    Json(request): Json<AddSuggestionRequest>,
) -> Result<Json<AckResponse>, ApiError>
where
    Store: SuggestionStore,
{
    let task_text = ranking::normalize(request.task_text.as_deref().unwrap_or(""));
    if task_text.is_empty() {
        return Err(ApiError::validation("task_text is required"));
    }

    state.store.upsert_increment(&task_text).await?;

    Ok(Json(AckResponse::new(
        "Suggestion added/updated successfully",
    )))
}

// =============================================================================
// Health Handler
// =============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
