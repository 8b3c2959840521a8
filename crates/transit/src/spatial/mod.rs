//! Spatial query utilities.

pub mod queries;

pub use queries::mean_center;
