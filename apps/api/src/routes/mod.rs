pub mod health;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::{assessment, chat, entries, reference, work_examples};

/// GET /api/ — service banner.
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "APS Job Helper API" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/", get(root_handler))
        // Assistant + tagged entries
        .route("/api/chat", post(chat::handlers::handle_chat))
        .route("/api/store", post(entries::handlers::handle_store_entry))
        .route("/api/entries", get(entries::handlers::handle_list_entries))
        .route(
            "/api/entries/:id",
            delete(entries::handlers::handle_delete_entry),
        )
        .route("/api/tags", get(entries::handlers::handle_list_tags))
        // Work examples
        .route(
            "/api/work-examples",
            post(work_examples::handlers::handle_create)
                .get(work_examples::handlers::handle_list),
        )
        .route(
            "/api/work-examples/:id",
            get(work_examples::handlers::handle_get)
                .put(work_examples::handlers::handle_update)
                .delete(work_examples::handlers::handle_delete),
        )
        .route(
            "/api/filters",
            get(work_examples::handlers::handle_filter_options),
        )
        // Assessment
        .route("/api/assess", post(assessment::handlers::handle_assess))
        .route(
            "/api/assessments/save",
            post(assessment::handlers::handle_save),
        )
        .route(
            "/api/assessments",
            get(assessment::handlers::handle_list_saved),
        )
        // Reference catalog
        .route(
            "/api/ils-reference",
            get(reference::handlers::handle_list_reference),
        )
        .with_state(state)
}
