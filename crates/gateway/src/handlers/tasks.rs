//! Task routes: one orchestrated create, plus straight forwards.
//!
//! Creating a task is a dual write against independently-owned stores: the
//! task record is authoritative, the suggestion frequency index is a
//! best-effort projection. The ordering contract lives in
//! [`create_task`]: the projection is attempted only after the task service
//! confirms the insert, and its outcome never changes what the caller sees.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use serde_json::{Value, json};

use crate::auth::{Principal, TokenVerifier};
use crate::clients::BackendClient;
use crate::dto::CreateTaskRequest;
use crate::errors::GatewayError;
use crate::relay::relay;
use crate::state::AppState;

// =============================================================================
// Create Task Handler (orchestrated)
// =============================================================================

pub async fn create_task<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Response, GatewayError>
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    // The task service does not enforce this invariant, so the gateway must.
    if request.task_text.trim().is_empty() {
        return Err(GatewayError::validation("task_text must not be empty"));
    }

    let payload = serde_json::to_value(&request)
        .map_err(|error| GatewayError::internal(error.to_string()))?;

    let result = state.tasks.post("/tasks", &payload).await;

    // Project into the suggestion index only for a confirmed insert; the
    // index must never reflect a task that was not durably created.
    if let Ok(reply) = &result {
        if reply.is_success() {
            project_suggestion(state.suggestions.as_ref(), &request.task_text).await;
        }
    }

    Ok(relay(result))
}

/// Best-effort projection of freshly created task text into the suggestion
/// frequency index. One attempt, no retry; failure is an operator concern,
/// never the caller's.
async fn project_suggestion<Client>(client: &Client, task_text: &str)
where
    Client: BackendClient,
{
    let payload = json!({ "task_text": task_text });

    match client.post("/suggestions/add", &payload).await {
        Ok(reply) if reply.is_success() => {}
        Ok(reply) => {
            tracing::warn!(
                status = %reply.status,
                task_text,
                "suggestion projection rejected; frequency index may lag"
            );
        }
        Err(error) => {
            tracing::warn!(
                %error,
                task_text,
                "suggestion projection failed; frequency index may lag"
            );
        }
    }
}

// =============================================================================
// Forwarded Task Handlers
// =============================================================================

pub async fn get_tasks<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Path(user_id): Path<String>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(state.tasks.get(&format!("/tasks/{user_id}")).await)
}

pub async fn complete_task<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Path(task_id): Path<String>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(
        state
            .tasks
            .put(&format!("/tasks/complete/{task_id}"), None)
            .await,
    )
}

pub async fn get_task_history<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Path(user_id): Path<String>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(state.tasks.get(&format!("/tasks/history/{user_id}")).await)
}

pub async fn update_task<Verifier, Client>(
    _principal: Principal,
    State(state): State<AppState<Verifier, Client>>,
    Path(task_id): Path<String>,
    Json(body): Json<Value>,
) -> Response
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    relay(
        state
            .tasks
            .put(&format!("/tasks/{task_id}"), Some(&body))
            .await,
    )
}
