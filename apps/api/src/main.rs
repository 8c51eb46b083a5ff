mod config;
mod errors;
mod llm_client;
mod profile;
mod routes;
mod session;
mod state;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(
        &config.gemini_api_url,
        &config.gemini_model,
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build Gemini HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; each session must supply its own key");
    }

    // Build app state
    let sessions = SessionStore::new();
    let state = AppState {
        llm: Arc::new(llm),
        sessions: sessions.clone(),
        config: config.clone(),
    };

    // Spawn idle session pruning
    let idle_timeout = chrono::Duration::seconds(i64::from(config.session_idle_timeout_secs));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            sessions.prune_idle(idle_timeout).await;
        }
    });
    info!(
        "Sessions expire after {}s idle",
        config.session_idle_timeout_secs
    );

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the form's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
