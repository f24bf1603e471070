mod assessment;
mod chat;
mod config;
mod entries;
mod errors;
mod llm;
mod models;
mod reference;
mod routes;
mod state;
mod store;
mod work_examples;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{mongo, DocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting APS Job Helper API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize MongoDB; `client` stays here so the connection can be closed
    // explicitly at shutdown.
    let (client, store) = mongo::connect(&config.mongo_url, &config.db_name).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(store);

    // Seed the ILS reference catalog (idempotent)
    reference::seed_reference_data(store.as_ref()).await?;

    // Initialize LLM client. A missing credential is not fatal here — it
    // surfaces per-request on the LLM-backed endpoints.
    let llm = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!("LLM client initialized (model: {})", llm::MODEL);

    let state = AppState {
        store,
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    client.shutdown().await;
    info!("MongoDB connection closed");

    Ok(())
}

/// Builds the CORS layer from the configured allow-list. A `*` entry means
/// fully permissive; otherwise only the listed origins are allowed.
fn build_cors(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
