use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use todo_gateway::auth::JwtTokenVerifier;
use todo_gateway::clients::{HttpBackendClient, ServiceKind};
use todo_gateway::config::GatewayConfig;
use todo_gateway::routes::create_router;
use todo_gateway::server::{Server, ServerConfig};
use todo_gateway::state::AppState;

/// Ceiling for a single backend call; exceeding it is treated the same as
/// an unreachable backend.
const BACKEND_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GatewayConfig::from_env()?;

    let http = reqwest::Client::builder()
        .timeout(BACKEND_TIMEOUT)
        .build()?;

    let verifier = JwtTokenVerifier::new(config.jwt_secret.as_bytes());
    let auth = HttpBackendClient::new(ServiceKind::Auth, &config.auth_service_url, http.clone());
    let tasks = HttpBackendClient::new(ServiceKind::Task, &config.task_service_url, http.clone());
    let suggestions =
        HttpBackendClient::new(ServiceKind::Suggestion, &config.suggestion_service_url, http);

    let state = AppState::new(verifier, auth, tasks, suggestions);
    let router = create_router(state);

    let server = Server::new(ServerConfig::new(config.host.clone(), config.port));
    server.run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_gateway=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
