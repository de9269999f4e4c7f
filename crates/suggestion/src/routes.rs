//! Router assembly for the suggestion service.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::store::SuggestionStore;

// =============================================================================
// Router Creation
// =============================================================================

pub fn create_router<Store>(state: AppState<Store>) -> Router
where
    Store: SuggestionStore,
{
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/suggestions", get(handlers::get_suggestions::<Store>))
        .route("/suggestions/add", post(handlers::add_suggestion::<Store>))
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
