//! Answer analysis — runs the full pipeline for one submission.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use polimap_common::entities::{Analysis, ResponseVector};
use serde::Serialize;
use tracing::info;
use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Axis labels, parallel to `analysis.coordinates`
    pub axes: Vec<String>,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// POST /api/analyze — body is a JSON object of question id → answer
pub async fn analyze(
    State(state): State<SharedState>,
    body: Result<Json<ResponseVector>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(responses) = body?;
    let analysis = state.model.analyze(&responses)?;

    info!(
        cluster = analysis.cluster,
        nearest = %analysis.nearest.name,
        distance = analysis.nearest.distance,
        "Answers analyzed"
    );

    Ok(Json(AnalyzeResponse {
        axes: state.model.axes().to_vec(),
        analysis,
    }))
}
