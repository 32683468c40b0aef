pub mod diagnostics;
pub mod health;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::chat::handlers;
use crate::resume::handlers::handle_resume_status;
use crate::state::AppState;

/// Local frontend dev servers (Vite and CRA defaults).
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        .route("/history", get(handlers::handle_history))
        .route("/resume", get(handle_resume_status))
        .route("/config-status", get(diagnostics::handle_config_status))
        .with_state(state)
}

/// Credentials are allowed, so methods and headers are mirrored instead of wildcarded.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(ALLOWED_ORIGINS.map(HeaderValue::from_static))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
