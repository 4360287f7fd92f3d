//! Nearest-centroid cluster assignment.

use std::collections::HashSet;

use polimap_common::entities::Centroid;
use polimap_common::{PolimapError, Result};

use crate::distance::{euclidean, minimum, ties_minimum};

/// Return the id of the centroid closest to `point`.
///
/// Every centroid within the tie tolerance of the minimum distance is a
/// candidate and the lowest id wins, so the result does not depend on the
/// order the centroids are stored in.
pub fn assign_cluster(point: &[f64], centroids: &[Centroid]) -> Result<u32> {
    let mut distances = Vec::with_capacity(centroids.len());
    for centroid in centroids {
        if centroid.point.len() != point.len() {
            return Err(PolimapError::dimension(
                format!("centroid {}", centroid.id),
                point.len(),
                centroid.point.len(),
            ));
        }
        distances.push((centroid.id, euclidean(point, &centroid.point)));
    }

    let min = minimum(distances.iter().map(|&(_, d)| d)).ok_or(PolimapError::EmptyCentroidSet)?;
    distances
        .into_iter()
        .filter(|&(_, d)| ties_minimum(d, min))
        .map(|(id, _)| id)
        .min()
        .ok_or(PolimapError::EmptyCentroidSet)
}

/// Check a centroid set once at startup: non-empty, unique ids, and every
/// point in a space of `dimension` coordinates.
pub fn validate_centroids(centroids: &[Centroid], dimension: usize) -> Result<()> {
    if centroids.is_empty() {
        return Err(PolimapError::EmptyCentroidSet);
    }
    let mut ids = HashSet::new();
    for c in centroids {
        if !ids.insert(c.id) {
            return Err(PolimapError::InvalidParameters(format!(
                "duplicate centroid id {}",
                c.id
            )));
        }
        if c.point.len() != dimension {
            return Err(PolimapError::dimension(
                format!("centroid {}", c.id),
                dimension,
                c.point.len(),
            ));
        }
        if c.point.iter().any(|v| !v.is_finite()) {
            return Err(PolimapError::InvalidParameters(format!(
                "centroid {} has a non-finite coordinate",
                c.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid(id: u32, point: &[f64]) -> Centroid {
        Centroid { id, point: point.to_vec() }
    }

    #[test]
    fn test_assigns_closest() {
        let centroids = vec![centroid(0, &[0.0, 0.0]), centroid(1, &[10.0, 10.0])];
        assert_eq!(assign_cluster(&[1.0, 2.0], &centroids).unwrap(), 0);
        assert_eq!(assign_cluster(&[9.0, 8.0], &centroids).unwrap(), 1);
    }

    #[test]
    fn test_idempotent() {
        let centroids = vec![
            centroid(0, &[-1.3, 0.2]),
            centroid(1, &[0.4, -0.9]),
            centroid(2, &[1.8, 1.1]),
        ];
        let point = [0.31, 0.07];
        let first = assign_cluster(&point, &centroids).unwrap();
        for _ in 0..10 {
            assert_eq!(assign_cluster(&point, &centroids).unwrap(), first);
        }
    }

    #[test]
    fn test_tie_goes_to_lowest_id_regardless_of_order() {
        let forward = vec![centroid(2, &[-1.0, 0.0]), centroid(5, &[1.0, 0.0])];
        let reversed = vec![centroid(5, &[1.0, 0.0]), centroid(2, &[-1.0, 0.0])];
        assert_eq!(assign_cluster(&[0.0, 0.0], &forward).unwrap(), 2);
        assert_eq!(assign_cluster(&[0.0, 0.0], &reversed).unwrap(), 2);
    }

    #[test]
    fn test_near_tolerance_ties_are_order_independent() {
        // 0.9e-9 apart pairwise, 1.8e-9 end to end: only ids 2 and 1 tie the minimum.
        let c2 = centroid(2, &[1.0]);
        let c1 = centroid(1, &[1.0 + 0.9e-9]);
        let c0 = centroid(0, &[1.0 + 1.8e-9]);
        let orders = [
            vec![c2.clone(), c1.clone(), c0.clone()],
            vec![c0.clone(), c2.clone(), c1.clone()],
            vec![c1.clone(), c0.clone(), c2.clone()],
            vec![c0.clone(), c1.clone(), c2.clone()],
            vec![c2.clone(), c0.clone(), c1.clone()],
            vec![c1, c2, c0],
        ];
        for centroids in &orders {
            assert_eq!(assign_cluster(&[0.0], centroids).unwrap(), 1);
        }
    }

    #[test]
    fn test_empty_centroid_set() {
        let err = assign_cluster(&[0.0, 0.0], &[]).unwrap_err();
        assert!(matches!(err, PolimapError::EmptyCentroidSet));
    }

    #[test]
    fn test_validate_rejects_duplicates_and_bad_dims() {
        let dupes = vec![centroid(1, &[0.0, 0.0]), centroid(1, &[1.0, 1.0])];
        assert!(matches!(validate_centroids(&dupes, 2), Err(PolimapError::InvalidParameters(_))));

        let flat = vec![centroid(0, &[0.0])];
        assert!(matches!(
            validate_centroids(&flat, 2),
            Err(PolimapError::DimensionMismatch { .. })
        ));
        assert!(matches!(validate_centroids(&[], 2), Err(PolimapError::EmptyCentroidSet)));
    }
}
