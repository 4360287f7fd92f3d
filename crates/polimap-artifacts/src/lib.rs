//! Model artifact loading.
//!
//! The trained pipeline is exported as four files in one directory:
//!
//! | File | Contents |
//! |------|----------|
//! | `scaler.json` | `{ "mean": [..], "scale": [..], "features": [..]? }` |
//! | `projection.json` | `{ "components": [[..]], "mean": [..]?, "axes": [..]? }` |
//! | `centroids.json` | `[ { "id": 0, "point": [..] }, .. ]` |
//! | `reference.csv` | `name,<axis columns..>[,cluster]`, one row per entity |
//!
//! Every failure is reported as `ArtifactLoad` naming the offending file.
//!
//! # Example
//!
//! ```rust,no_run
//! use polimap_artifacts::load_model;
//! use polimap_common::PolimapConfig;
//!
//! #[tokio::main]
//! async fn main() -> polimap_common::Result<()> {
//!     let config = PolimapConfig::load(None)?;
//!     let model = load_model(&config).await?;
//!     println!("{} reference entries", model.reference().len());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use polimap_common::entities::{
    Centroid, ModelArtifacts, ProjectionParams, ReferenceEntry, ScalerParams,
};
use polimap_common::{PolimapConfig, PolimapError, Result};
use polimap_engine::{InterpretationMap, PoliticalModel};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

pub const SCALER_FILE: &str = "scaler.json";
pub const PROJECTION_FILE: &str = "projection.json";
pub const CENTROIDS_FILE: &str = "centroids.json";
pub const REFERENCE_FILE: &str = "reference.csv";

/// Reads the exported artifacts from a model directory.
#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    model_dir: PathBuf,
}

impl ArtifactLoader {
    pub fn new<P: AsRef<Path>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.as_ref().to_path_buf(),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Read all four artifacts.
    pub async fn load(&self) -> Result<ModelArtifacts> {
        info!("Loading model artifacts from {:?}", self.model_dir);

        let scaler: ScalerParams = self.load_json(SCALER_FILE).await?;
        let projection: ProjectionParams = self.load_json(PROJECTION_FILE).await?;
        let centroids: Vec<Centroid> = self.load_json(CENTROIDS_FILE).await?;
        let reference = self.load_reference().await?;

        info!(
            features = scaler.mean.len(),
            axes = projection.components.len(),
            centroids = centroids.len(),
            references = reference.len(),
            "Model artifacts loaded"
        );

        Ok(ModelArtifacts { scaler, projection, centroids, reference })
    }

    async fn read(&self, file: &str) -> Result<String> {
        let path = self.model_dir.join(file);
        debug!("Reading {:?}", path);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PolimapError::artifact(file, format!("{}: {e}", path.display())))
    }

    async fn load_json<T: DeserializeOwned>(&self, file: &str) -> Result<T> {
        let content = self.read(file).await?;
        serde_json::from_str(&content).map_err(|e| PolimapError::artifact(file, e))
    }

    async fn load_reference(&self) -> Result<Vec<ReferenceEntry>> {
        let content = self.read(REFERENCE_FILE).await?;
        parse_reference_csv(&content).map_err(|e| match e {
            PolimapError::ArtifactLoad { .. } => e,
            other => PolimapError::artifact(REFERENCE_FILE, other),
        })
    }
}

/// Parse the reference table.
///
/// The first column holds the entity name whatever its header (the original
/// export calls it `CANDIDAT`). A last column headed `cluster` (any case)
/// holds the optional cluster id; every column in between is an axis.
pub fn parse_reference_csv(content: &str) -> Result<Vec<ReferenceEntry>> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.trim().to_string()).collect();

    let has_cluster = headers
        .last()
        .map(|h| h.eq_ignore_ascii_case("cluster"))
        .unwrap_or(false);
    let axis_end = if has_cluster { headers.len() - 1 } else { headers.len() };
    if axis_end < 2 {
        return Err(PolimapError::artifact(
            REFERENCE_FILE,
            "expected a name column followed by at least one axis column",
        ));
    }

    let mut entries = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let line = row + 2;

        let name = record.get(0).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(PolimapError::artifact(REFERENCE_FILE, format!("line {line}: empty name")));
        }

        let coordinates = (1..axis_end)
            .map(|i| {
                let raw = record.get(i).map(str::trim).unwrap_or_default();
                raw.parse::<f64>().map_err(|_| {
                    PolimapError::artifact(
                        REFERENCE_FILE,
                        format!("line {line}: '{raw}' in column '{}' is not a number", headers[i]),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        let cluster = if has_cluster {
            match record.get(axis_end).map(str::trim) {
                None | Some("") => None,
                Some(raw) => Some(parse_cluster_id(raw).ok_or_else(|| {
                    PolimapError::artifact(
                        REFERENCE_FILE,
                        format!("line {line}: '{raw}' is not a cluster id"),
                    )
                })?),
            }
        } else {
            None
        };

        entries.push(ReferenceEntry { name: name.to_string(), coordinates, cluster });
    }

    Ok(entries)
}

/// Cluster ids may be exported as floats ("2.0") by dataframe tooling.
fn parse_cluster_id(raw: &str) -> Option<u32> {
    if let Ok(id) = raw.parse::<u32>() {
        return Some(id);
    }
    let f = raw.parse::<f64>().ok()?;
    (f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64).then_some(f as u32)
}

/// Load the artifacts named by `config`, build the question set and the
/// interpretation map, and assemble a validated model.
pub async fn load_model(config: &PolimapConfig) -> Result<PoliticalModel> {
    let questions = config.question_set()?;
    let artifacts = ArtifactLoader::new(&config.model.dir).load().await?;
    let interpretation = InterpretationMap::with_overrides(&config.interpretation.clusters);
    PoliticalModel::new(questions, artifacts, interpretation, config.responses)
}
