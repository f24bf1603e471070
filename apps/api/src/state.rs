use std::sync::Arc;

use crate::config::Config;
use crate::llm::ChatClient;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both adapters sit behind trait objects so tests can inject an in-memory
/// store and a stub chat client. Services hold no state of their own; every
/// request is an independent transformation of (request, store snapshot).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub llm: Arc<dyn ChatClient>,
    pub config: Config,
}
