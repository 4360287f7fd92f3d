//! polimap-common — Shared types, errors, and configuration used across all Polimap crates.

pub mod error;
pub mod entities;
pub mod questions;
pub mod config;

// Re-export commonly used types
pub use config::{PolimapConfig, RangePolicy, ResponseConfig};
pub use error::{PolimapError, Result};
pub use questions::{Question, QuestionSet};
