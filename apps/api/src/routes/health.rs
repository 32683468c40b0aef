use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "Portfolio API is live!",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
