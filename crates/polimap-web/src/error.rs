//! Mapping of pipeline errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use polimap_common::PolimapError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// The pipeline refused the answers, or the model is misconfigured.
    Pipeline(PolimapError),
    /// The request body could not be read as a map of integer answers.
    Body(JsonRejection),
}

impl From<PolimapError> for ApiError {
    fn from(e: PolimapError) -> Self {
        Self::Pipeline(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Body(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Pipeline(e) if e.is_caller_error() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Pipeline(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(rejection) => rejection.status(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Pipeline(e) => e.kind(),
            Self::Body(_) => "invalid_body",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Pipeline(e) => e.to_string(),
            Self::Body(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            // A validated model should never get here; the artifacts and the
            // question set disagree somewhere.
            tracing::error!(error = %message, kind = self.kind(), "Pipeline configuration fault");
        } else {
            tracing::debug!(error = %message, kind = self.kind(), "Rejected request");
        }
        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));
        (status, body).into_response()
    }
}
