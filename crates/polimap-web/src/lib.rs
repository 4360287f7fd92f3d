//! polimap-web — HTTP service for the political map.
//! Provides:
//!   - the question list
//!   - answer analysis (coordinates, cluster, nearest candidate)
//!   - map data for plotting on the client side

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
