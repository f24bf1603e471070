use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::entry::StoredEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoreRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    pub tag: Option<String>,
}

/// POST /api/store — store text with AI-generated tags.
pub async fn handle_store_entry(
    State(state): State<AppState>,
    Json(req): Json<StoreRequest>,
) -> Result<Json<StoredEntry>, AppError> {
    let entry = super::submit_entry(state.store.as_ref(), state.llm.as_ref(), &req.content).await?;
    Ok(Json(entry))
}

/// GET /api/entries — all stored entries, optionally filtered by tag.
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Query(params): Query<EntriesQuery>,
) -> Result<Json<Vec<StoredEntry>>, AppError> {
    let entries = super::list_entries(state.store.as_ref(), params.tag.as_deref()).await?;
    Ok(Json(entries))
}

/// GET /api/tags — all unique tags, sorted.
pub async fn handle_list_tags(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let tags = super::list_tags(state.store.as_ref()).await?;
    Ok(Json(tags))
}

/// DELETE /api/entries/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete_entry(state.store.as_ref(), &id).await?;
    Ok(Json(json!({ "message": "Entry deleted successfully" })))
}
