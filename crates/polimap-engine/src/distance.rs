//! Euclidean distance in the projected space.

/// Distances closer than this are treated as ties.
pub const TIE_TOLERANCE: f64 = 1e-9;

/// Euclidean distance between two points of equal dimension.
/// Callers check dimensions first; extra coordinates are ignored.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Smallest finite distance, or `None` when there is none.
pub fn minimum(distances: impl IntoIterator<Item = f64>) -> Option<f64> {
    distances
        .into_iter()
        .filter(|d| d.is_finite())
        .fold(None, |min: Option<f64>, d| Some(min.map_or(d, |m| m.min(d))))
}

/// True when `distance` ties the minimum, i.e. lies within the tie tolerance
/// of it. Measured against the minimum, not pairwise, so ties are transitive.
pub fn ties_minimum(distance: f64, min: f64) -> bool {
    distance.is_finite() && distance - min <= TIE_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_three_four_five() {
        assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = [1.5, -2.0, 0.25];
        let b = [-0.5, 4.0, 1.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
    }

    #[test]
    fn test_tie_tolerance() {
        assert!(ties_minimum(1.0 + 1e-12, 1.0));
        assert!(ties_minimum(1.0, 1.0));
        assert!(!ties_minimum(1.5, 1.0));
        assert!(!ties_minimum(f64::NAN, 1.0));
    }

    #[test]
    fn test_minimum_skips_non_finite() {
        assert_eq!(minimum([2.0, f64::NAN, 0.5, f64::INFINITY]), Some(0.5));
        assert_eq!(minimum([f64::NAN]), None);
        assert_eq!(minimum(std::iter::empty()), None);
    }
}
