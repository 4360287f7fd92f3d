//! Shared application state for the web server.

use std::sync::Arc;

use polimap_engine::PoliticalModel;

/// Shared state injected into every Axum handler.
/// The model is immutable after startup, so no locking is needed.
#[derive(Debug)]
pub struct AppState {
    pub model: PoliticalModel,
}

impl AppState {
    pub fn new(model: PoliticalModel) -> Self {
        Self { model }
    }
}

pub type SharedState = Arc<AppState>;
