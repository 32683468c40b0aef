use axum::{extract::State, Json};
use serde::Serialize;

use crate::resume::ResumeDocument;
use crate::state::AppState;

const PREVIEW_CHARS: usize = 500;

#[derive(Debug, Serialize)]
pub struct ResumeStatusResponse {
    pub source: String,
    pub characters: usize,
    pub preview: String,
}

impl From<ResumeDocument> for ResumeStatusResponse {
    fn from(doc: ResumeDocument) -> Self {
        Self {
            characters: doc.text.chars().count(),
            preview: doc.text.chars().take(PREVIEW_CHARS).collect(),
            source: doc.source,
        }
    }
}

/// GET /resume
/// Confirms which resume the backend is reading and how much of it.
pub async fn handle_resume_status(State(state): State<AppState>) -> Json<ResumeStatusResponse> {
    Json(state.resume.load().await.into())
}
