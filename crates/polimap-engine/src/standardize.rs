//! Per-feature standardization: z = (x − mean) / scale.

use polimap_common::entities::ScalerParams;
use polimap_common::{PolimapError, Result};

/// Standardize `raw` with parallel `mean` / `scale` arrays.
/// Returns a vector of the same length as the input.
pub fn standardize(raw: &[f64], mean: &[f64], scale: &[f64]) -> Result<Vec<f64>> {
    if mean.len() != scale.len() {
        return Err(PolimapError::InvalidParameters(format!(
            "scaler has {} means but {} scales",
            mean.len(),
            scale.len()
        )));
    }
    if raw.len() != mean.len() {
        return Err(PolimapError::dimension("standardizer input", mean.len(), raw.len()));
    }

    raw.iter()
        .zip(mean.iter().zip(scale.iter()))
        .enumerate()
        .map(|(i, (&x, (&m, &s)))| {
            if s == 0.0 || !s.is_finite() {
                return Err(PolimapError::InvalidParameters(format!(
                    "scale[{i}] is {s}, cannot standardize"
                )));
            }
            Ok((x - m) / s)
        })
        .collect()
}

/// Validated standardization parameters.
#[derive(Debug, Clone)]
pub struct Standardizer {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Standardizer {
    pub fn new(params: &ScalerParams) -> Result<Self> {
        if params.mean.is_empty() {
            return Err(PolimapError::InvalidParameters("scaler has no features".to_string()));
        }
        if params.mean.len() != params.scale.len() {
            return Err(PolimapError::InvalidParameters(format!(
                "scaler has {} means but {} scales",
                params.mean.len(),
                params.scale.len()
            )));
        }
        if let Some(i) = params.mean.iter().position(|m| !m.is_finite()) {
            return Err(PolimapError::InvalidParameters(format!("mean[{i}] is not finite")));
        }
        if let Some(i) = params.scale.iter().position(|&s| s == 0.0 || !s.is_finite()) {
            return Err(PolimapError::InvalidParameters(format!(
                "scale[{i}] is {}, cannot standardize",
                params.scale[i]
            )));
        }
        Ok(Self {
            mean: params.mean.clone(),
            scale: params.scale.clone(),
        })
    }

    /// Identity parameters: zero mean, unit scale.
    pub fn identity(dimension: usize) -> Self {
        Self {
            mean: vec![0.0; dimension],
            scale: vec![1.0; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    pub fn apply(&self, raw: &[f64]) -> Result<Vec<f64>> {
        standardize(raw, &self.mean, &self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standardize_basic() {
        let z = standardize(&[3.0, -1.0], &[1.0, 1.0], &[2.0, 0.5]).unwrap();
        assert!((z[0] - 1.0).abs() < 1e-12);
        assert!((z[1] + 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_length_preserved() {
        let s = Standardizer::identity(19);
        for n in [0.0, -2.0, 2.0] {
            let out = s.apply(&vec![n; 19]).unwrap();
            assert_eq!(out.len(), 19);
        }
    }

    #[test]
    fn test_wrong_length_is_dimension_mismatch() {
        let s = Standardizer::identity(3);
        let err = s.apply(&[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, PolimapError::DimensionMismatch { expected: 3, found: 2, .. }));
    }

    #[test]
    fn test_zero_scale_fails_fast() {
        let err = standardize(&[1.0, 1.0], &[0.0, 0.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, PolimapError::InvalidParameters(_)));

        let params = ScalerParams { mean: vec![0.0], scale: vec![0.0], features: None };
        assert!(matches!(Standardizer::new(&params), Err(PolimapError::InvalidParameters(_))));
    }

    #[test]
    fn test_mismatched_parameter_lengths() {
        let params = ScalerParams { mean: vec![0.0, 0.0], scale: vec![1.0], features: None };
        assert!(Standardizer::new(&params).is_err());
    }
}
