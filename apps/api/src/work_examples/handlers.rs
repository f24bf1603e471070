use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::work_example::WorkExample;
use crate::state::AppState;

use super::{FilterOptions, ListQuery, WorkExampleInput};

/// POST /api/work-examples
pub async fn handle_create(
    State(state): State<AppState>,
    Json(input): Json<WorkExampleInput>,
) -> Result<Json<WorkExample>, AppError> {
    let example = super::create(state.store.as_ref(), input).await?;
    Ok(Json(example))
}

/// GET /api/work-examples — conjunctive filters plus free-text search.
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<WorkExample>>, AppError> {
    let examples = super::list(state.store.as_ref(), &query).await?;
    Ok(Json(examples))
}

/// GET /api/work-examples/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkExample>, AppError> {
    let example = super::get(state.store.as_ref(), &id).await?;
    Ok(Json(example))
}

/// PUT /api/work-examples/:id — full replace of structured fields.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<WorkExampleInput>,
) -> Result<Json<WorkExample>, AppError> {
    let example = super::update(state.store.as_ref(), &id, input).await?;
    Ok(Json(example))
}

/// DELETE /api/work-examples/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    super::delete(state.store.as_ref(), &id).await?;
    Ok(Json(json!({ "message": "Work example deleted successfully" })))
}

/// GET /api/filters — distinct values for the listing dropdowns.
pub async fn handle_filter_options(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, AppError> {
    let options = super::filter_options(state.store.as_ref()).await?;
    Ok(Json(options))
}
