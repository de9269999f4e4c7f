//! Shared application state for the gateway.
//!
//! One verifier and three backend clients, wired once at startup and handed
//! to the router; handlers never reach for ambient configuration.

use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::clients::BackendClient;

// =============================================================================
// AppState
// =============================================================================

pub struct AppState<Verifier, Client>
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    pub verifier: Arc<Verifier>,

    pub auth: Arc<Client>,

    pub tasks: Arc<Client>,

    pub suggestions: Arc<Client>,
}

impl<Verifier, Client> AppState<Verifier, Client>
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    #[must_use]
    pub fn new(verifier: Verifier, auth: Client, tasks: Client, suggestions: Client) -> Self {
        Self {
            verifier: Arc::new(verifier),
            auth: Arc::new(auth),
            tasks: Arc::new(tasks),
            suggestions: Arc::new(suggestions),
        }
    }
}

// Manual impl: deriving Clone would put Clone bounds on the type parameters,
// which the Arcs make unnecessary.
impl<Verifier, Client> Clone for AppState<Verifier, Client>
where
    Verifier: TokenVerifier,
    Client: BackendClient,
{
    fn clone(&self) -> Self {
        Self {
            verifier: Arc::clone(&self.verifier),
            auth: Arc::clone(&self.auth),
            tasks: Arc::clone(&self.tasks),
            suggestions: Arc::clone(&self.suggestions),
        }
    }
}
