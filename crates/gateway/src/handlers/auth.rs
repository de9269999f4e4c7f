//! Unauthenticated forwards to the identity service.

use axum::Json;
use axum::extract::State;
use axum::response::Response;
use serde_json::Value;

use crate::auth::TokenVerifier;
use crate::clients::BackendClient;
use crate::relay::relay;
use crate::state::AppState;

// =============================================================================
// Register Handler
// =============================================================================

pub async fn register<Verifier, Client>(
    State(state): State<AppState<Verifier, Client>>,
    Json(body): Json<Value>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(state.auth.post("/register", &body).await)
}

// =============================================================================
// Login Handler
// =============================================================================

pub async fn login<Verifier, Client>(
    State(state): State<AppState<Verifier, Client>>,
    Json(body): Json<Value>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(state.auth.post("/login", &body).await)
}
