/// Core value types shared by the loader, the engine, and the service layers.
/// Model parameters are plain serde structs; the engine validates them once
/// when it assembles a model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// One user's answers, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseVector {
    answers: BTreeMap<String, i32>,
}

impl ResponseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when assembling answers before submission.
    pub fn with(mut self, question: &str, value: i32) -> Self {
        self.answers.insert(question.to_string(), value);
        self
    }

    pub fn get(&self, question: &str) -> Option<i32> {
        self.answers.get(question).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.answers.keys().map(String::as_str)
    }
}

impl FromIterator<(String, i32)> for ResponseVector {
    fn from_iter<I: IntoIterator<Item = (String, i32)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Model parameters
// ---------------------------------------------------------------------------

/// Per-feature centering and scaling, in question order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    /// Column names seen at training time, if the exporter recorded them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Linear projection onto the political space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    /// Row-major, one row per output axis.
    pub components: Vec<Vec<f64>>,
    /// Centering offset subtracted before projecting (zeros when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub id: u32,
    pub point: Vec<f64>,
}

/// A named entity (e.g. a candidate) with a precomputed position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    pub coordinates: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
}

/// Everything the trained pipeline exported, as read from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub scaler: ScalerParams,
    pub projection: ProjectionParams,
    pub centroids: Vec<Centroid>,
    pub reference: Vec<ReferenceEntry>,
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestReference {
    pub name: String,
    pub distance: f64,
    /// Position of the entry in the reference table.
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<u32>,
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub coordinates: Vec<f64>,
    pub cluster: u32,
    pub interpretation: String,
    pub nearest: NearestReference,
}
