//! Nearest reference entity lookup.
//!
//! The reference table holds tens of entries, so this is a plain linear scan.

use polimap_common::entities::{NearestReference, ReferenceEntry};
use polimap_common::{PolimapError, Result};

use crate::distance::{euclidean, minimum, ties_minimum};

/// Closest entry in a reference table, borrowed from the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub index: usize,
    pub entry: &'a ReferenceEntry,
    pub distance: f64,
}

impl Nearest<'_> {
    pub fn to_owned_result(&self) -> NearestReference {
        NearestReference {
            name: self.entry.name.clone(),
            distance: self.distance,
            index: self.index,
            cluster: self.entry.cluster,
        }
    }
}

/// Find the entry closest to `point`. Entries within the tie tolerance of
/// the minimum distance are ties, and the lowest table index wins.
pub fn find_nearest<'a>(point: &[f64], table: &'a [ReferenceEntry]) -> Result<Nearest<'a>> {
    let mut distances = Vec::with_capacity(table.len());
    for entry in table {
        if entry.coordinates.len() != point.len() {
            return Err(PolimapError::dimension(
                format!("reference entry '{}'", entry.name),
                point.len(),
                entry.coordinates.len(),
            ));
        }
        distances.push(euclidean(point, &entry.coordinates));
    }

    let min = minimum(distances.iter().copied()).ok_or(PolimapError::EmptyReferenceTable)?;
    distances
        .into_iter()
        .zip(table)
        .enumerate()
        .find(|(_, (distance, _))| ties_minimum(*distance, min))
        .map(|(index, (distance, entry))| Nearest { index, entry, distance })
        .ok_or(PolimapError::EmptyReferenceTable)
}
