// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::load_render_config;
use crate::infrastructure::http_gateway::HttpGateway;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    chat, current_dashboard, format_chat, health_check, render_dashboard, service_status,
    submit_estimate,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_render_config()?;

    // Initialize tracing; RUST_LOG takes precedence over the configured level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Create gateway (infrastructure layer)
    let gateway = Arc::new(HttpGateway::new(
        &config.backend.base_url,
        config.backend.timeout(),
    )?);

    // Create application state (services and dashboard session)
    let state = Arc::new(AppState::new(gateway, config.display.formatter()));

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/status", get(service_status))
        .route("/estimates", post(submit_estimate))
        .route("/dashboard", get(current_dashboard).post(render_dashboard))
        .route("/chat", post(chat))
        .route("/chat/format", post(format_chat))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!(
        "Starting buildai-render on {} (backend {})",
        addr,
        config.backend.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
