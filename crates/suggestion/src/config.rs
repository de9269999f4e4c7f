//! Service configuration, loaded once at startup.

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
// SuggestionConfig
// =============================================================================

/// Immutable configuration for the suggestion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// MySQL connection URL for the `task_suggestions` table.
    pub database_url: String,

    pub host: String,

    pub port: u16,
}

impl SuggestionConfig {
    /// Loads configuration from the environment (and a `.env` file if one
    /// exists).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `DATABASE_URL` is unset,
    /// or [`ConfigError::InvalidValue`] when `SUGGESTION_PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = get_required_env("DATABASE_URL")?;
        let host = get_optional_env("SUGGESTION_HOST", "0.0.0.0");
        let port = get_optional_env_parsed("SUGGESTION_PORT", 5003)?;

        Ok(Self {
            database_url,
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn socket_addr_formats_host_and_port() {
        let config = SuggestionConfig {
            database_url: "mysql://localhost/todo_db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5003,
        };

        assert_eq!(config.socket_addr(), "127.0.0.1:5003");
    }

    #[rstest]
    fn missing_env_var_display() {
        let error = ConfigError::MissingEnvVar("DATABASE_URL".to_string());
        assert_eq!(
            error.to_string(),
            "Missing environment variable: DATABASE_URL"
        );
    }

    #[rstest]
    fn invalid_value_display() {
        let error = ConfigError::InvalidValue {
            key: "SUGGESTION_PORT".to_string(),
            message: "'abc' is not a valid port".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid value for SUGGESTION_PORT: 'abc' is not a valid port"
        );
    }
}
