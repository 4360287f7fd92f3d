//! Cluster id → human-readable political orientation.

use std::collections::BTreeMap;

use polimap_common::config::ClusterLabel;
use polimap_common::entities::Centroid;
use polimap_common::{PolimapError, Result};
use serde::{Deserialize, Serialize};

/// The three groups found in the CEVIPOF reference population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    EconomicLeft,
    Centre,
    Right,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [Self::EconomicLeft, Self::Centre, Self::Right];

    pub fn cluster_id(self) -> u32 {
        match self {
            Self::EconomicLeft => 0,
            Self::Centre => 1,
            Self::Right => 2,
        }
    }

    pub fn from_cluster(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.cluster_id() == id)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::EconomicLeft => "Gauche économique / écologiste / progressiste.",
            Self::Centre => "Centre / libéral modéré.",
            Self::Right => "Droite libérale / conservatrice / souverainiste.",
        }
    }
}

impl TryFrom<u32> for Orientation {
    type Error = PolimapError;

    fn try_from(id: u32) -> Result<Self> {
        Self::from_cluster(id).ok_or(PolimapError::UnknownCluster(id))
    }
}

/// Labels per cluster id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InterpretationMap {
    labels: BTreeMap<u32, String>,
}

impl Default for InterpretationMap {
    fn default() -> Self {
        Self {
            labels: Orientation::ALL
                .into_iter()
                .map(|o| (o.cluster_id(), o.description().to_string()))
                .collect(),
        }
    }
}

impl InterpretationMap {
    pub fn empty() -> Self {
        Self { labels: BTreeMap::new() }
    }

    /// Default labels with configured overrides (and extra clusters) applied on top.
    pub fn with_overrides(overrides: &[ClusterLabel]) -> Self {
        let mut map = Self::default();
        for o in overrides {
            map.labels.insert(o.id, o.label.clone());
        }
        map
    }

    pub fn insert(&mut self, id: u32, label: impl Into<String>) {
        self.labels.insert(id, label.into());
    }

    pub fn describe(&self, id: u32) -> Result<&str> {
        self.labels
            .get(&id)
            .map(String::as_str)
            .ok_or(PolimapError::UnknownCluster(id))
    }

    /// Fail with `UnknownCluster` for the first centroid id that has no label.
    pub fn ensure_covers(&self, centroids: &[Centroid]) -> Result<()> {
        match centroids.iter().find(|c| !self.labels.contains_key(&c.id)) {
            Some(c) => Err(PolimapError::UnknownCluster(c.id)),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
