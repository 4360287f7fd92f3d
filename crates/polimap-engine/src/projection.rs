//! Linear projection of standardized answers onto the political axes.
//!
//! y = C · (x − m), with C the component matrix (one row per output axis)
//! and m an optional centering offset exported alongside the basis.

use polimap_common::entities::ProjectionParams;
use polimap_common::{PolimapError, Result};

/// Axis labels used for the two-axis CEVIPOF map when the artifact has none.
const DEFAULT_2D_AXES: [&str; 2] = ["PC1 (économique)", "PC2 (social)"];

fn default_axes(n: usize) -> Vec<String> {
    if n == DEFAULT_2D_AXES.len() {
        DEFAULT_2D_AXES.iter().map(|s| s.to_string()).collect()
    } else {
        (1..=n).map(|i| format!("PC{i}")).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Projector {
    components: Vec<Vec<f64>>,
    offset: Vec<f64>,
    axes: Vec<String>,
}

impl Projector {
    pub fn new(params: &ProjectionParams) -> Result<Self> {
        let rows = params.components.len();
        if rows == 0 {
            return Err(PolimapError::InvalidParameters(
                "projection has no output axes".to_string(),
            ));
        }
        let width = params.components[0].len();
        if width == 0 {
            return Err(PolimapError::InvalidParameters(
                "projection rows are empty".to_string(),
            ));
        }
        for (i, row) in params.components.iter().enumerate() {
            if row.len() != width {
                return Err(PolimapError::InvalidParameters(format!(
                    "projection row {i} has {} columns, row 0 has {width}",
                    row.len()
                )));
            }
            if row.iter().any(|v| !v.is_finite()) {
                return Err(PolimapError::InvalidParameters(format!(
                    "projection row {i} contains a non-finite value"
                )));
            }
        }

        let offset = match &params.mean {
            Some(mean) if mean.len() != width => {
                return Err(PolimapError::InvalidParameters(format!(
                    "projection mean has {} values, expected {width}",
                    mean.len()
                )))
            }
            Some(mean) => mean.clone(),
            None => vec![0.0; width],
        };

        let axes = match &params.axes {
            Some(axes) if axes.len() != rows => {
                return Err(PolimapError::InvalidParameters(format!(
                    "projection names {} axes but has {rows} rows",
                    axes.len()
                )))
            }
            Some(axes) => axes.clone(),
            None => default_axes(rows),
        };

        Ok(Self {
            components: params.components.clone(),
            offset,
            axes,
        })
    }

    /// Identity basis of size `n` (no centering).
    pub fn identity(n: usize) -> Self {
        let components = (0..n)
            .map(|r| (0..n).map(|c| if r == c { 1.0 } else { 0.0 }).collect())
            .collect();
        Self {
            components,
            offset: vec![0.0; n],
            axes: default_axes(n),
        }
    }

    /// Width of the standardized vectors this projector accepts.
    pub fn input_dimension(&self) -> usize {
        self.offset.len()
    }

    /// Number of coordinates produced.
    pub fn output_dimension(&self) -> usize {
        self.components.len()
    }

    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    pub fn project(&self, standardized: &[f64]) -> Result<Vec<f64>> {
        if standardized.len() != self.input_dimension() {
            return Err(PolimapError::dimension(
                "projection input",
                self.input_dimension(),
                standardized.len(),
            ));
        }
        Ok(self
            .components
            .iter()
            .map(|row| {
                row.iter()
                    .zip(standardized.iter().zip(self.offset.iter()))
                    .map(|(w, (x, m))| w * (x - m))
                    .sum()
            })
            .collect())
    }
}
