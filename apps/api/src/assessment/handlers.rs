use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::assessment::SavedAssessment;
use crate::state::AppState;

use super::DEFAULT_LEVEL;

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    pub example_text: String,
    #[serde(default = "default_level")]
    pub aps_level: String,
}

#[derive(Debug, Serialize)]
pub struct AssessResponse {
    pub assessment: String,
    pub example_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveAssessmentRequest {
    #[serde(default)]
    pub example_id: Option<String>,
    pub example_text: String,
    pub assessment_text: String,
}

/// POST /api/assess — one-shot ILS assessment of a work example.
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(req): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    let assessment = super::assess(
        state.store.as_ref(),
        state.llm.as_ref(),
        &req.example_text,
        &req.aps_level,
    )
    .await?;
    Ok(Json(AssessResponse {
        assessment,
        example_text: req.example_text,
    }))
}

/// POST /api/assessments/save
pub async fn handle_save(
    State(state): State<AppState>,
    Json(req): Json<SaveAssessmentRequest>,
) -> Result<Json<Value>, AppError> {
    let saved = super::save(
        state.store.as_ref(),
        req.example_id,
        req.example_text,
        req.assessment_text,
    )
    .await?;
    Ok(Json(json!({
        "message": "Assessment saved successfully",
        "id": saved.id
    })))
}

/// GET /api/assessments — saved assessments, newest first.
pub async fn handle_list_saved(
    State(state): State<AppState>,
) -> Result<Json<Vec<SavedAssessment>>, AppError> {
    let saved = super::list_saved(state.store.as_ref()).await?;
    Ok(Json(saved))
}
