//! Data behind the political map: axes, centroids, and reference entries
//! grouped by cluster. Rendering is left to the presentation layer.

use serde::Serialize;

use polimap_common::entities::{Centroid, ReferenceEntry};

#[derive(Debug, Clone, Serialize)]
pub struct ClusterGroup {
    /// `None` collects entries exported without a cluster id
    pub cluster: Option<u32>,
    pub label: Option<String>,
    pub entries: Vec<ReferenceEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PoliticalMap {
    pub axes: Vec<String>,
    pub centroids: Vec<Centroid>,
    pub groups: Vec<ClusterGroup>,
}

/// Group reference entries by cluster id, ascending, keeping table order
/// within each group. Unclustered entries come last.
pub fn group_by_cluster(table: &[ReferenceEntry]) -> Vec<(Option<u32>, Vec<ReferenceEntry>)> {
    let mut clusters: Vec<Option<u32>> = table.iter().map(|e| e.cluster).collect();
    clusters.sort_by_key(|c| (c.is_none(), *c));
    clusters.dedup();

    clusters
        .into_iter()
        .map(|cluster| {
            let entries = table
                .iter()
                .filter(|e| e.cluster == cluster)
                .cloned()
                .collect();
            (cluster, entries)
        })
        .collect()
}
