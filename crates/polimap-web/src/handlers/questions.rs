//! Question list for the survey form.

use axum::{extract::State, Json};
use polimap_common::Question;
use serde::Serialize;
use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct QuestionList {
    /// Allowed answer range, inclusive
    pub min: i32,
    pub max: i32,
    pub questions: Vec<Question>,
}

/// GET /api/questions
pub async fn questions(State(state): State<SharedState>) -> Json<QuestionList> {
    let range = state.model.response_range();
    Json(QuestionList {
        min: range.min,
        max: range.max,
        questions: state.model.questions().iter().cloned().collect(),
    })
}
