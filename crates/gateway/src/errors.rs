//! Gateway error type and response conversion.
//!
//! Transport failures from backends do not appear here; those are mapped by
//! the relay (`crate::relay`). This type covers everything the gateway
//! decides on its own: rejected credentials, rejected input, unmatched
//! routes, and its own unexpected failures.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::auth::AuthError;
use crate::dto::ErrorResponse;

// =============================================================================
// GatewayError
// =============================================================================

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{message}")]
    Validation { message: String },

    #[error("Not found")]
    NotFound,

    #[error("{message}")]
    Internal { message: String },
}

impl GatewayError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::new(self.to_string());
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(GatewayError::Auth(AuthError::MissingCredential), StatusCode::UNAUTHORIZED)]
    #[case(GatewayError::Auth(AuthError::ExpiredCredential), StatusCode::UNAUTHORIZED)]
    #[case(GatewayError::Auth(AuthError::InvalidCredential), StatusCode::UNAUTHORIZED)]
    #[case(GatewayError::validation("bad input"), StatusCode::BAD_REQUEST)]
    #[case(GatewayError::NotFound, StatusCode::NOT_FOUND)]
    #[case(GatewayError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_the_error_taxonomy(
        #[case] error: GatewayError,
        #[case] expected: StatusCode,
    ) {
        assert_eq!(error.status_code(), expected);
    }

    #[rstest]
    fn auth_errors_keep_their_wire_messages() {
        let error = GatewayError::Auth(AuthError::ExpiredCredential);
        assert_eq!(error.to_string(), "Token has expired");
    }

    #[rstest]
    fn not_found_message_matches_wire_contract() {
        assert_eq!(GatewayError::NotFound.to_string(), "Not found");
    }
}
