//! polimap-engine — Inference pipeline from survey answers to a position on the political map.
//!
//! responses → standardize → project → {cluster, nearest reference} → interpretation

pub mod distance;
pub mod response;
pub mod standardize;
pub mod projection;
pub mod cluster;
pub mod nearest;
pub mod interpretation;
pub mod map;
pub mod model;

pub use interpretation::{InterpretationMap, Orientation};
pub use model::PoliticalModel;
