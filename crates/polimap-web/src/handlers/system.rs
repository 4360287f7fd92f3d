//! Liveness and model summary.

use axum::{extract::State, Json};
use serde::Serialize;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub questions: usize,
    pub axes: usize,
    pub clusters: usize,
    pub references: usize,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthStatus> {
    let model = &state.model;
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        questions: model.questions().len(),
        axes: model.axes().len(),
        clusters: model.centroids().len(),
        references: model.reference().len(),
    })
}
