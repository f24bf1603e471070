use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "new_session_id")]
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

/// POST /api/chat — chat with the assistant about APS job applications.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = super::chat(
        state.store.as_ref(),
        state.llm.as_ref(),
        &req.message,
        &req.session_id,
    )
    .await?;
    Ok(Json(ChatResponse {
        response,
        session_id: req.session_id,
    }))
}
