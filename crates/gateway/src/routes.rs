//! Router assembly for the gateway.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::TokenVerifier;
use crate::clients::BackendClient;
use crate::handlers;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Builds the gateway router.
///
/// Auth routes are open; every task and suggestion route is gated by the
/// [`crate::auth::Principal`] extractor, so a missing or rejected
/// credential is answered with 401 before any backend is contacted.
pub fn create_router<Verifier, Client>(state: AppState<Verifier, Client>) -> Router
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        // Identity forwards (no credential required)
        .route("/auth/register", post(handlers::register::<Verifier, Client>))
        .route("/auth/login", post(handlers::login::<Verifier, Client>))
        // Orchestrated create
        .route("/tasks", post(handlers::create_task::<Verifier, Client>))
        // Task forwards. GET takes a user id, PUT takes a task id; axum
        // requires one registration per path pattern.
        .route(
            "/tasks/{id}",
            get(handlers::get_tasks::<Verifier, Client>)
                .put(handlers::update_task::<Verifier, Client>),
        )
        .route(
            "/tasks/complete/{task_id}",
            put(handlers::complete_task::<Verifier, Client>),
        )
        .route(
            "/tasks/history/{user_id}",
            get(handlers::get_task_history::<Verifier, Client>),
        )
        // Suggestion forward
        .route(
            "/suggestions",
            get(handlers::get_suggestions::<Verifier, Client>),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(state)
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Tests
// =============================================================================
