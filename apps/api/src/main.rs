mod chat;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::llm_client::OpenRouterClient;
use crate::resume::ResumeProvider;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration is loaded once; the OpenRouter key is optional at startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.openrouter_api_key.is_none() {
        warn!(
            "OPENROUTER_API_KEY is not set (checked {} and the environment); /chat will fail",
            config.dotenv_path.display()
        );
    }

    // Initialize SQLite
    let db = create_pool(&config.database_path).await?;
    init_schema(&db).await?;

    let resume = ResumeProvider::new(config.resume_path.clone());
    info!(
        "Resume source: {} (path {})",
        resume.source().await,
        resume.path().display()
    );

    let llm = OpenRouterClient::new()?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState {
        db,
        llm: Arc::new(llm),
        config: config.clone(),
        resume,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let addr = config.bind_addr();
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
