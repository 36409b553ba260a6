//! Web server setup and lifecycle

use crate::{poller::Poller, routes::build_routes, state::AppState};
use axum::Router;
use calldash_core::Config;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the complete web application around shared state
pub fn build_app(state: Arc<AppState>) -> Router {
    build_routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Address the server listens on
///
/// # Errors
///
/// Returns an error if the configured host is not an IP address.
pub fn listen_addr(config: &Config) -> Result<SocketAddr, String> {
    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid server host '{}': {e}", config.server.host))?;
    Ok(SocketAddr::new(host, config.server.port))
}

/// Serve the dashboard until Ctrl+C.
///
/// The call list poller runs for as long as the server does.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = listen_addr(&config)?;
    let state = Arc::new(AppState::new(config));
    let poller = Poller::start(
        state.controller.clone(),
        state.config.dashboard.poll_interval(),
    );

    info!(
        %addr,
        backend = %state.config.backend.base_url,
        "Starting call dashboard"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let served = axum::serve(listener, build_app(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await;

    poller.shutdown().await;
    info!("Call dashboard stopped");

    served.map_err(Into::into)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
