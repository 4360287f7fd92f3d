//! HTTP handlers for all routes.

pub mod analyze;
pub mod map;
pub mod questions;
pub mod system;
