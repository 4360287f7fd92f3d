//! Data behind the political map scatter plot.

use axum::{extract::State, Json};
use polimap_engine::map::PoliticalMap;
use crate::state::SharedState;

/// GET /api/map
pub async fn political_map(State(state): State<SharedState>) -> Json<PoliticalMap> {
    Json(state.model.political_map())
}
