//! Runtime configuration for Polimap.
//!
//! Reads polimap.toml from an explicit path, the POLIMAP_CONFIG env var, or
//! the current directory. YAML and JSON files are accepted as well.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PolimapError, Result};
use crate::questions::QuestionSet;

pub const CONFIG_ENV_VAR: &str = "POLIMAP_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "polimap.toml";

/// Complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolimapConfig {
    /// Where the model artifacts live
    #[serde(default)]
    pub model: ModelConfig,

    /// Bounds and policy applied to incoming answers
    #[serde(default)]
    pub responses: ResponseConfig,

    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Cluster label overrides
    #[serde(default)]
    pub interpretation: InterpretationConfig,
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Directory holding scaler.json, projection.json, centroids.json, reference.csv
    #[serde(default = "default_model_dir")]
    pub dir: PathBuf,

    /// Optional YAML/JSON question list replacing the built-in questionnaire
    #[serde(default)]
    pub questions_file: Option<PathBuf>,
}

fn default_model_dir() -> PathBuf { PathBuf::from("./model") }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            dir: default_model_dir(),
            questions_file: None,
        }
    }
}

// ── Responses ─────────────────────────────────────────────────────────────────

/// What to do with an answer outside [min, max].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Pull the value back into range, as the bounded slider does
    #[default]
    Clamp,
    /// Fail the request with `OutOfRange`
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseConfig {
    #[serde(default = "default_min")]
    pub min: i32,
    #[serde(default = "default_max")]
    pub max: i32,
    #[serde(default)]
    pub policy: RangePolicy,
}

fn default_min() -> i32 { -2 }
fn default_max() -> i32 { 2 }

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
            policy: RangePolicy::default(),
        }
    }
}

// ── Server ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// ── Interpretation ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterpretationConfig {
    #[serde(default)]
    pub clusters: Vec<ClusterLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterLabel {
    pub id: u32,
    pub label: String,
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl PolimapConfig {
    /// Resolve and load configuration.
    ///
    /// An explicit path or POLIMAP_CONFIG must point at an existing file.
    /// Without either, ./polimap.toml is used when present and the built-in
    /// defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        let config = match requested {
            Some(path) => {
                if !path.exists() {
                    return Err(PolimapError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_path(&path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_path(path)?
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from a file, picking the format by extension (TOML by default).
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(path),
            Some("json") => Self::from_json(path),
            _ => Self::from_toml(path),
        }
    }

    pub fn from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_yaml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn from_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.responses.min > self.responses.max {
            return Err(PolimapError::Config(format!(
                "responses.min ({}) is greater than responses.max ({})",
                self.responses.min, self.responses.max
            )));
        }
        Ok(())
    }

    /// The configured question list, or the built-in questionnaire.
    pub fn question_set(&self) -> Result<QuestionSet> {
        match &self.model.questions_file {
            Some(path) => QuestionSet::from_file(path),
            None => Ok(QuestionSet::default()),
        }
    }

    /// "host:port" for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
