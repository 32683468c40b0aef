use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::llm_client::ChatCompleter;
use crate::resume::ResumeProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// `OpenRouterClient` in production; a stub in tests.
    pub llm: Arc<dyn ChatCompleter>,
    pub config: Config,
    pub resume: ResumeProvider,
}
