//! Authenticated forward to the suggestion service.

use axum::extract::{Query, State};
use axum::response::Response;

use crate::auth::{Principal, TokenVerifier};
use crate::clients::BackendClient;
use crate::dto::SuggestionQuery;
use crate::relay::relay;
use crate::state::AppState;

// =============================================================================
// Get Suggestions Handler
// =============================================================================

pub async fn get_suggestions<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Query(params): Query<SuggestionQuery>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    let query = params.q.unwrap_or_default();

    relay(
        state
            .suggestions
            .get_with_query("/suggestions", &[("q", query.as_str())])
            .await,
    )
}
