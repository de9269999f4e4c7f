//! The response relay: one policy for turning a backend call's outcome into
//! the gateway's answer, applied identically on every route.
//!
//! - A well-formed backend answer passes through with status and body
//!   unchanged, whether it was a success or an application error.
//! - An unreachable backend becomes `503 {"error": "<service> unavailable"}`.
//! - Any other failure while handling the backend's answer becomes
//!   `500 {"error": "<message>"}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::clients::{ServiceError, ServiceReply};
use crate::dto::ErrorResponse;

// =============================================================================
// Relay
// =============================================================================

pub fn relay(result: Result<ServiceReply, ServiceError>) -> Response {
    match result {
        Ok(reply) => (reply.status, Json(reply.body)).into_response(),
        Err(error @ ServiceError::Unreachable { .. }) => {
            tracing::error!(%error, "backend unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(error.to_string())),
            )
                .into_response()
        }
        Err(ServiceError::Unexpected { service, message }) => {
            tracing::error!(%service, %message, "unexpected failure talking to backend");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            )
                .into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ServiceKind;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn success_reply_passes_through_verbatim() {
        let reply = ServiceReply::new(StatusCode::CREATED, json!({"task_id": "abc"}));

        let response = relay(Ok(reply));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"task_id": "abc"}));
    }

    #[rstest]
    #[tokio::test]
    async fn application_error_reply_passes_through_verbatim() {
        let reply = ServiceReply::new(
            StatusCode::CONFLICT,
            json!({"error": "Email already registered"}),
        );

        let response = relay(Ok(reply));

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Email already registered"})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_backend_becomes_503() {
        let response = relay(Err(ServiceError::Unreachable {
            service: ServiceKind::Suggestion,
        }));

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Suggestion service unavailable"})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn unexpected_failure_becomes_500() {
        let response = relay(Err(ServiceError::unexpected(
            ServiceKind::Task,
            "invalid response body: EOF",
        )));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "invalid response body: EOF"})
        );
    }
}
