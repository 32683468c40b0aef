use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chat::history::{get_recent_messages, record_exchange, DEFAULT_HISTORY_LIMIT};
use crate::chat::prompts::build_system_prompt;
use crate::errors::AppError;
use crate::models::message::MessageRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub messages: Vec<MessageRow>,
}

/// POST /chat
/// Answers a question about the resume and records the exchange.
/// Nothing is persisted unless the upstream call succeeds.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let api_key = state
        .config
        .openrouter_api_key
        .as_deref()
        .ok_or_else(|| AppError::Configuration("OpenRouter API key not set in .env".to_string()))?;

    let user_message = req.message.trim();
    if user_message.is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }

    let resume = state.resume.context().await;
    let system_prompt = build_system_prompt(&resume);
    debug!(
        "Sending chat turn: message_chars={}, system_chars={}",
        user_message.chars().count(),
        system_prompt.chars().count()
    );

    let reply = state
        .llm
        .complete(api_key, &system_prompt, user_message)
        .await?;

    record_exchange(&state.db, user_message, &reply).await?;
    info!("Chat exchange recorded (reply_chars={})", reply.chars().count());

    Ok(Json(ChatResponse { reply }))
}

/// GET /history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<HistoryResponse>, AppError> {
    let messages = get_recent_messages(&state.db, DEFAULT_HISTORY_LIMIT).await?;
    Ok(Json(HistoryResponse { messages }))
}
