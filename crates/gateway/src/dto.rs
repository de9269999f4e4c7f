//! Request and response bodies owned by the gateway.
//!
//! Most routes forward raw JSON untouched; only the orchestrated task
//! creation parses its body, because the gateway enforces the non-empty
//! `task_text` invariant itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub user_id: String,

    pub task_text: String,

    /// Opaque to the gateway; forwarded to the task service as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Value>,

    /// Opaque to the gateway; forwarded to the task service as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionQuery {
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub const fn healthy() -> Self {
        Self { status: "healthy" }
    }
}
