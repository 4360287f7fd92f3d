//! The assembled, validated model and the end-to-end analysis pass.
//!
//! A `PoliticalModel` is built once at startup and never mutated, so it can
//! be shared across threads behind an `Arc` without locking. Every
//! consistency check between the question set and the artifacts happens in
//! [`PoliticalModel::new`]; a model that was built successfully can only
//! fail a request because of the caller's answers.

use polimap_common::entities::{
    Analysis, Centroid, ModelArtifacts, ReferenceEntry, ResponseVector,
};
use polimap_common::{PolimapError, QuestionSet, ResponseConfig, Result};
use tracing::{debug, info};

use crate::cluster::{assign_cluster, validate_centroids};
use crate::interpretation::InterpretationMap;
use crate::map::{group_by_cluster, ClusterGroup, PoliticalMap};
use crate::nearest::find_nearest;
use crate::projection::Projector;
use crate::response::build_feature_vector;
use crate::standardize::Standardizer;

const SCALER: &str = "scaler";
const PROJECTION: &str = "projection";
const CENTROIDS: &str = "centroids";
const REFERENCE: &str = "reference table";

#[derive(Debug, Clone)]
pub struct PoliticalModel {
    questions: QuestionSet,
    range: ResponseConfig,
    standardizer: Standardizer,
    projector: Projector,
    centroids: Vec<Centroid>,
    reference: Vec<ReferenceEntry>,
    interpretation: InterpretationMap,
}

impl PoliticalModel {
    /// Validate the artifacts against the question set and assemble the model.
    /// Any inconsistency is reported as `ArtifactLoad` naming the artifact.
    pub fn new(
        questions: QuestionSet,
        artifacts: ModelArtifacts,
        interpretation: InterpretationMap,
        range: ResponseConfig,
    ) -> Result<Self> {
        if range.min > range.max {
            return Err(PolimapError::Config(format!(
                "answer range [{}, {}] is empty",
                range.min, range.max
            )));
        }
        let ModelArtifacts { scaler, projection, centroids, reference } = artifacts;

        let standardizer =
            Standardizer::new(&scaler).map_err(|e| PolimapError::artifact(SCALER, e))?;
        if standardizer.dimension() != questions.len() {
            return Err(PolimapError::artifact(
                SCALER,
                format!(
                    "{} features but the question set has {} questions",
                    standardizer.dimension(),
                    questions.len()
                ),
            ));
        }
        if let Some(features) = &scaler.features {
            if !features.iter().map(String::as_str).eq(questions.ids()) {
                return Err(PolimapError::artifact(
                    SCALER,
                    "feature names do not match the question set order",
                ));
            }
        }

        let projector =
            Projector::new(&projection).map_err(|e| PolimapError::artifact(PROJECTION, e))?;
        if projector.input_dimension() != standardizer.dimension() {
            return Err(PolimapError::artifact(
                PROJECTION,
                format!(
                    "expects {} inputs but the scaler produces {}",
                    projector.input_dimension(),
                    standardizer.dimension()
                ),
            ));
        }
        let dims = projector.output_dimension();

        validate_centroids(&centroids, dims).map_err(|e| PolimapError::artifact(CENTROIDS, e))?;
        interpretation
            .ensure_covers(&centroids)
            .map_err(|e| PolimapError::artifact(CENTROIDS, e))?;

        if reference.is_empty() {
            return Err(PolimapError::artifact(REFERENCE, PolimapError::EmptyReferenceTable));
        }
        for entry in &reference {
            if entry.coordinates.len() != dims {
                return Err(PolimapError::artifact(
                    REFERENCE,
                    format!(
                        "entry '{}' has {} coordinates, expected {dims}",
                        entry.name,
                        entry.coordinates.len()
                    ),
                ));
            }
            if entry.coordinates.iter().any(|v| !v.is_finite()) {
                return Err(PolimapError::artifact(
                    REFERENCE,
                    format!("entry '{}' has a non-finite coordinate", entry.name),
                ));
            }
            if let Some(cluster) = entry.cluster {
                if !centroids.iter().any(|c| c.id == cluster) {
                    return Err(PolimapError::artifact(
                        REFERENCE,
                        format!("entry '{}' names unknown cluster {cluster}", entry.name),
                    ));
                }
            }
        }

        info!(
            questions = questions.len(),
            axes = dims,
            clusters = centroids.len(),
            references = reference.len(),
            "Political model assembled"
        );

        Ok(Self {
            questions,
            range,
            standardizer,
            projector,
            centroids,
            reference,
            interpretation,
        })
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn response_range(&self) -> &ResponseConfig {
        &self.range
    }

    pub fn axes(&self) -> &[String] {
        self.projector.axes()
    }

    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    pub fn reference(&self) -> &[ReferenceEntry] {
        &self.reference
    }

    pub fn interpretation(&self) -> &InterpretationMap {
        &self.interpretation
    }

    /// Standardize and project an ordered feature vector.
    pub fn project(&self, features: &[f64]) -> Result<Vec<f64>> {
        let standardized = self.standardizer.apply(features)?;
        self.projector.project(&standardized)
    }

    /// Run the full pipeline on one user's answers.
    pub fn analyze(&self, responses: &ResponseVector) -> Result<Analysis> {
        let features = build_feature_vector(&self.questions, responses, &self.range)?;
        self.analyze_features(&features)
    }

    /// Run the pipeline from an already ordered feature vector.
    pub fn analyze_features(&self, features: &[f64]) -> Result<Analysis> {
        let coordinates = self.project(features)?;
        debug!(?coordinates, "Projected answers");

        let cluster = assign_cluster(&coordinates, &self.centroids)?;
        let nearest = find_nearest(&coordinates, &self.reference)?;
        debug!(cluster, nearest = %nearest.entry.name, distance = nearest.distance, "Located on map");

        let interpretation = self.interpretation.describe(cluster)?.to_string();

        Ok(Analysis {
            coordinates,
            cluster,
            interpretation,
            nearest: nearest.to_owned_result(),
        })
    }

    /// Map data for plotting: axes, centroids, and the reference table by cluster.
    pub fn political_map(&self) -> PoliticalMap {
        let groups = group_by_cluster(&self.reference)
            .into_iter()
            .map(|(cluster, entries)| ClusterGroup {
                cluster,
                label: cluster
                    .and_then(|id| self.interpretation.describe(id).ok())
                    .map(str::to_string),
                entries,
            })
            .collect();

        PoliticalMap {
            axes: self.axes().to_vec(),
            centroids: self.centroids.clone(),
            groups,
        }
    }
}
