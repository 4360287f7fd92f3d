//! Feature vector construction from a user's answers.

use polimap_common::entities::ResponseVector;
use polimap_common::error::RESPONSES_CONTEXT;
use polimap_common::{PolimapError, QuestionSet, RangePolicy, ResponseConfig, Result};
use tracing::warn;

/// Apply the range policy to a single answer.
pub fn bound_answer(question: &str, value: i32, range: &ResponseConfig) -> Result<i32> {
    if (range.min..=range.max).contains(&value) {
        return Ok(value);
    }
    match range.policy {
        RangePolicy::Clamp => {
            let clamped = value.clamp(range.min, range.max);
            warn!(question, value, clamped, "Answer outside range, clamping");
            Ok(clamped)
        }
        RangePolicy::Reject => Err(PolimapError::OutOfRange {
            question: question.to_string(),
            value,
            min: range.min,
            max: range.max,
        }),
    }
}

/// Arrange answers in question-set order as a numeric vector.
///
/// Every question must be answered and every answer must name a known
/// question. Length of the result always equals `questions.len()`.
pub fn build_feature_vector(
    questions: &QuestionSet,
    responses: &ResponseVector,
    range: &ResponseConfig,
) -> Result<Vec<f64>> {
    if let Some(unknown) = responses.question_ids().find(|id| !questions.contains(id)) {
        return Err(PolimapError::UnknownQuestion(unknown.to_string()));
    }

    let mut features = Vec::with_capacity(questions.len());
    for question in questions.iter() {
        let value = responses.get(&question.id).ok_or_else(|| {
            PolimapError::dimension(RESPONSES_CONTEXT, questions.len(), responses.len())
        })?;
        features.push(bound_answer(&question.id, value, range)? as f64);
    }
    Ok(features)
}
