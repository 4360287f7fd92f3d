use thiserror::Error;

/// Context tag for dimension errors caused by the caller's answers.
pub const RESPONSES_CONTEXT: &str = "responses";

#[derive(Debug, Error)]
pub enum PolimapError {
    /// A startup artifact is missing, malformed, or inconsistent with the question set.
    #[error("Failed to load artifact '{artifact}': {reason}")]
    ArtifactLoad { artifact: String, reason: String },

    #[error("Dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid model parameters: {0}")]
    InvalidParameters(String),

    #[error("No cluster centroids configured")]
    EmptyCentroidSet,

    #[error("Reference table has no entries")]
    EmptyReferenceTable,

    #[error("No interpretation for cluster {0}")]
    UnknownCluster(u32),

    #[error("Unknown question id: {0}")]
    UnknownQuestion(String),

    #[error("Answer {value} to '{question}' is outside [{min}, {max}]")]
    OutOfRange {
        question: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PolimapError {
    pub fn artifact(artifact: impl Into<String>, reason: impl ToString) -> Self {
        Self::ArtifactLoad {
            artifact: artifact.into(),
            reason: reason.to_string(),
        }
    }

    pub fn dimension(context: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            found,
        }
    }

    /// True when the error was caused by the caller's answers rather than
    /// by the loaded model or configuration.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownQuestion(_) | Self::OutOfRange { .. }
        ) || matches!(self, Self::DimensionMismatch { context, .. } if context == RESPONSES_CONTEXT)
    }

    /// Short machine-readable kind, used in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ArtifactLoad { .. } => "artifact_load",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::InvalidParameters(_) => "invalid_parameters",
            Self::EmptyCentroidSet => "empty_centroid_set",
            Self::EmptyReferenceTable => "empty_reference_table",
            Self::UnknownCluster(_) => "unknown_cluster",
            Self::UnknownQuestion(_) => "unknown_question",
            Self::OutOfRange { .. } => "out_of_range",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Yaml(_) => "yaml",
            Self::Toml(_) => "toml",
            Self::Csv(_) => "csv",
        }
    }
}

pub type Result<T> = std::result::Result<T, PolimapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_answer_is_caller_error() {
        let err = PolimapError::dimension(RESPONSES_CONTEXT, 19, 18);
        assert!(err.is_caller_error());
        assert_eq!(err.kind(), "dimension_mismatch");
    }

    #[test]
    fn test_model_mismatch_is_not_caller_error() {
        let err = PolimapError::dimension("projection input", 19, 18);
        assert!(!err.is_caller_error());
        assert!(!PolimapError::EmptyCentroidSet.is_caller_error());
    }

    #[test]
    fn test_artifact_message_names_file() {
        let err = PolimapError::artifact("scaler.json", "missing field `mean`");
        assert!(err.to_string().contains("scaler.json"));
    }
}
