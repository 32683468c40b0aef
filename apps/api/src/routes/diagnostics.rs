use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::Config;
use crate::state::AppState;

/// Reports whether the OpenRouter key is configured without revealing it.
#[derive(Debug, Serialize)]
pub struct ConfigStatusResponse {
    pub dotenv_path: String,
    pub dotenv_exists: bool,
    pub openrouter_key_set: bool,
    pub openrouter_key_length: usize,
}

impl From<&Config> for ConfigStatusResponse {
    fn from(config: &Config) -> Self {
        Self {
            dotenv_path: config.dotenv_path.display().to_string(),
            dotenv_exists: config.dotenv_exists(),
            openrouter_key_set: config.openrouter_api_key.is_some(),
            openrouter_key_length: config.api_key_len(),
        }
    }
}

/// GET /config-status
pub async fn handle_config_status(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
    Json(ConfigStatusResponse::from(&state.config))
}
