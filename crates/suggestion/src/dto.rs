//! Request and response bodies for the suggestion endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionQuery {
    /// Raw query text; absent means "rank everything by frequency".
    pub q: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddSuggestionRequest {
    pub task_text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
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
