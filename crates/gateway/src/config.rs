//! Gateway configuration, loaded once at startup and passed by reference.

use std::env;

use thiserror::Error;

// =============================================================================
// ConfigError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

// =============================================================================
// GatewayConfig
// =============================================================================

/// Immutable configuration for the gateway process.
///
/// Constructed once in `main` and handed to the verifier and the backend
/// clients; request handlers never read the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub auth_service_url: String,

    pub task_service_url: String,

    pub suggestion_service_url: String,

    /// Shared HS256 signing secret for verifying bearer credentials.
    pub jwt_secret: String,

    pub host: String,

    pub port: u16,
}

impl GatewayConfig {
    /// Loads configuration from the environment (and a `.env` file if one
    /// exists).
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET_KEY` (required)
    /// - `AUTH_SERVICE_URL` (default `http://localhost:5001`)
    /// - `TASK_SERVICE_URL` (default `http://localhost:5002`)
    /// - `SUGGESTION_SERVICE_URL` (default `http://localhost:5003`)
    /// - `GATEWAY_HOST` (default `0.0.0.0`)
    /// - `GATEWAY_PORT` (default `5000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when the secret is unset, or
    /// [`ConfigError::InvalidValue`] when the port is not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_secret = get_required_env("JWT_SECRET_KEY")?;
        let auth_service_url = get_optional_env("AUTH_SERVICE_URL", "http://localhost:5001");
        let task_service_url = get_optional_env("TASK_SERVICE_URL", "http://localhost:5002");
        let suggestion_service_url =
            get_optional_env("SUGGESTION_SERVICE_URL", "http://localhost:5003");
        let host = get_optional_env("GATEWAY_HOST", "0.0.0.0");
        let port = get_optional_env_parsed("GATEWAY_PORT", 5000)?;

        Ok(Self {
            auth_service_url,
            task_service_url,
            suggestion_service_url,
            jwt_secret,
            host,
            port,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Env Helpers
// =============================================================================

fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn get_optional_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_optional_env_parsed(key: &str, default: u16) -> Result<u16, ConfigError> {
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value.parse().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("'{value}' is not a valid port"),
            })
        },
    )
}

// =============================================================================
// Tests
// =============================================================================
