mod config;
mod datafile;
mod errors;
mod llm_client;
mod models;
mod routes;
mod spellcheck;
mod state;
mod store;
mod suggestion;
mod validation;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::datafile::load_data;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::spellcheck::EditDistanceCorrector;
use crate::state::AppState;
use crate::store::ResumeStore;
use crate::suggestion::GeminiSuggestionProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Build the store: backing file when configured and readable, seed
    // dataset otherwise.
    let store = match config.data_file.as_deref().and_then(load_data) {
        Some(data) => {
            info!("Loaded resume data from backing file");
            ResumeStore::from_data(data)
        }
        None => ResumeStore::seed(),
    };

    // Initialize LLM client
    let llm = GeminiClient::new(config.google_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state with injected capabilities
    let state = AppState {
        store: store.shared(),
        spell: Arc::new(EditDistanceCorrector),
        suggestions: Arc::new(GeminiSuggestionProvider::new(llm)),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
