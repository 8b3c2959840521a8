//! Rail data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::{RailDataset, StationLookup};
pub use types::{
    Result, RouteSegment, Schedule, StateBoundary, Station, StationIndex, TransitError,
};
