mod advice;
mod analytics;
mod board;
mod config;
mod errors;
mod extraction;
mod ingest;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::board::JobBoard;
use crate::config::Config;
use crate::extraction::GeminiExtractor;
use crate::ingest::inbox::MockInbox;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerGuardian API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client. A missing credential degrades the AI features to
    // their fallbacks; it must not prevent startup.
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set — extraction and advice will return fallbacks");
    }
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // In-memory board, seeded with demo records. State is volatile by design.
    let board = Arc::new(RwLock::new(JobBoard::demo()));

    // Build app state
    let state = AppState {
        board,
        llm: llm.clone(),
        extractor: Arc::new(GeminiExtractor::new(llm)),
        inbox: Arc::new(MockInbox),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
