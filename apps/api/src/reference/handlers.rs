use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::reference::ReferenceItem;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReferenceQuery {
    pub aps_level: Option<String>,
    pub capability: Option<String>,
}

/// GET /api/ils-reference
pub async fn handle_list_reference(
    State(state): State<AppState>,
    Query(params): Query<ReferenceQuery>,
) -> Result<Json<Vec<ReferenceItem>>, AppError> {
    let items = super::list_reference(
        state.store.as_ref(),
        params.aps_level.as_deref(),
        params.capability.as_deref(),
    )
    .await?;
    Ok(Json(items))
}
