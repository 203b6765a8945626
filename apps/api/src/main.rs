mod config;
mod errors;
mod generation;
mod llm_client;
mod routes;
mod selection;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::content::LlmContentGenerator;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::selection::catalog::TemplateCatalog;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Landing API v{}", env!("CARGO_PKG_VERSION"));

    // An empty or inconsistent catalog is a deployment error: refuse to start.
    let catalog = TemplateCatalog::builtin().context("template catalog failed to load")?;
    info!("Template catalog loaded ({} templates)", catalog.len());

    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_max_retries)
        .context("failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        catalog: Arc::new(catalog),
        content_generator: Arc::new(LlmContentGenerator(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
