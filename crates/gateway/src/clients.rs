//! Backend service clients.
//!
//! Each backend is reached through the [`BackendClient`] port; the gateway
//! never interprets a backend's application-level response beyond its status
//! code. [`HttpBackendClient`] is the one production adapter, a thin reqwest
//! wrapper instantiated once per backend over a shared connection pool.

use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

// =============================================================================
// ServiceKind
// =============================================================================

/// Which backend a client talks to. The display form feeds the 503 message,
/// so it is part of the public error contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Auth,
    Task,
    Suggestion,
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(formatter, "Auth service"),
            Self::Task => write!(formatter, "Task service"),
            Self::Suggestion => write!(formatter, "Suggestion service"),
        }
    }
}

// =============================================================================
// ServiceReply
// =============================================================================

/// A backend's well-formed HTTP answer, success and application error alike.
#[derive(Debug, Clone)]
pub struct ServiceReply {
    pub status: StatusCode,

    pub body: Value,
}

impl ServiceReply {
    #[must_use]
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

// =============================================================================
// ServiceError
// =============================================================================

/// Transport-level failure talking to a backend. Application errors are not
/// errors here; they arrive as a [`ServiceReply`] and pass through verbatim.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Connection-level failure, including timeouts.
    #[error("{service} unavailable")]
    Unreachable { service: ServiceKind },

    /// Anything else that went wrong while processing the backend's answer.
    #[error("{message}")]
    Unexpected {
        service: ServiceKind,
        message: String,
    },
}

impl ServiceError {
    #[must_use]
    pub fn unexpected(service: ServiceKind, message: impl Into<String>) -> Self {
        Self::Unexpected {
            service,
            message: message.into(),
        }
    }
}

// =============================================================================
// BackendClient Port
// =============================================================================

pub trait BackendClient: Send + Sync + 'static {
    fn get(&self, path: &str) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send;

    fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send;

    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send;

    fn put(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send;
}

// =============================================================================
// HttpBackendClient
// =============================================================================

#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    service: ServiceKind,
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackendClient {
    #[must_use]
    pub fn new(service: ServiceKind, base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            service,
            base_url,
            http,
        }
    }

    #[must_use]
    pub const fn service(&self) -> ServiceKind {
        self.service
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ServiceReply, ServiceError> {
        let response = request.send().await.map_err(|error| self.classify(error))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .map_err(|error| ServiceError::unexpected(self.service, error.to_string()))?;

        let body = response.json::<Value>().await.map_err(|error| {
            ServiceError::unexpected(self.service, format!("invalid response body: {error}"))
        })?;

        Ok(ServiceReply::new(status, body))
    }

    /// A timed-out call is indistinguishable from an unreachable backend as
    /// far as callers are concerned.
    fn classify(&self, error: reqwest::Error) -> ServiceError {
        if error.is_connect() || error.is_timeout() {
            ServiceError::Unreachable {
                service: self.service,
            }
        } else {
            ServiceError::unexpected(self.service, error.to_string())
        }
    }
}

impl BackendClient for HttpBackendClient {
    fn get(&self, path: &str) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send {
        let request = self.http.get(self.url(path));
        self.dispatch(request)
    }

    fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send {
        let request = self.http.get(self.url(path)).query(query);
        self.dispatch(request)
    }

    fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send {
        let request = self.http.post(self.url(path)).json(body);
        self.dispatch(request)
    }

    fn put(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<ServiceReply, ServiceError>> + Send {
        let mut request = self.http.put(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.dispatch(request)
    }
}

// =============================================================================
// Tests
// =============================================================================
