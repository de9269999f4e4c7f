//! Credential verification.
//!
//! The gateway validates bearer credentials locally against the shared
//! signing secret; no call to the identity service happens on protected
//! routes. The [`Principal`] extractor is the gate: protected handlers take
//! it as an argument, so a rejected credential stops the request before any
//! downstream call is made.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use thiserror::Error;

use crate::clients::BackendClient;
use crate::errors::GatewayError;
use crate::state::AppState;

// =============================================================================
// Principal
// =============================================================================

/// The authenticated caller, derived from a verified credential.
/// Request-scoped; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
}

// =============================================================================
// AuthError
// =============================================================================

/// Why a credential was rejected. Every variant maps to 401; the messages
/// are part of the public API surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Token is missing")]
    MissingCredential,

    #[error("Token has expired")]
    ExpiredCredential,

    #[error("Invalid token")]
    InvalidCredential,
}

// =============================================================================
// TokenVerifier Port
// =============================================================================

pub trait TokenVerifier: Send + Sync + 'static {
    fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

// =============================================================================
// JwtTokenVerifier
// =============================================================================

#[derive(Debug, Deserialize)]
struct Claims {
    user_id: String,
    #[allow(dead_code)]
    exp: usize,
}

/// HS256 verifier sharing the identity service's signing secret.
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenVerifier {
    #[must_use]
    pub fn new(secret: &[u8]) -> Self {
        // Validation::new requires and checks the exp claim by default.
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| Principal {
                user_id: data.claims.user_id,
            })
            .map_err(|error| match error.kind() {
                ErrorKind::ExpiredSignature => AuthError::ExpiredCredential,
                _ => AuthError::InvalidCredential,
            })
    }
}

// =============================================================================
// Bearer Extraction
// =============================================================================

/// Pulls the token out of `Authorization: Bearer <token>`.
///
/// An absent header is [`AuthError::MissingCredential`]; a present header
/// with the wrong scheme or an empty token is
/// [`AuthError::InvalidCredential`].
pub fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredential)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidCredential)?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::InvalidCredential)
}

// =============================================================================
// Principal Extractor
// =============================================================================

impl<Verifier, Client> FromRequestParts<AppState<Verifier, Client>> for Principal
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    type Rejection = GatewayError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState<Verifier, Client>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let principal = state.verifier.verify(token)?;
        Ok(principal)
    }
}

// =============================================================================
// Tests
// =============================================================================
