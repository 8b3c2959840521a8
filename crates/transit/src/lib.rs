//! # rail-atlas-transit
//!
//! Indian railway station, state-boundary and train-route datasets.
//!
//! ## Features
//!
//! - **Typed records**: stations, state outlines and route segments with schedules
//! - **GeoJSON and shapefile loading**: tolerant decoding that skips malformed features
//! - **Degrading loaders**: missing datasets become empty ones, with a logged diagnostic
//! - **Read-only provider**: load once, share everywhere behind `Arc`
//!
//! ## Example
//!
//! ```
//! use rail_atlas_transit::prelude::*;
//! use geo::Point;
//!
//! let stations = vec![
//!     Station::new("MAO", "Madgaon", "Goa", Point::new(73.95, 15.27)),
//!     Station::new("VSG", "Vasco Da Gama", "Goa", Point::new(73.81, 15.40)),
//! ];
//!
//! let provider = StaticRailProvider::from_data(stations, vec![], vec![], StationIndex::default());
//!
//! let madgaon = provider.station(&StationCode::new("MAO")).unwrap();
//! assert_eq!(&*madgaon.name, "Madgaon");
//! ```

pub mod identifiers;
pub mod loader;
pub mod models;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::loader::{DatasetSource, DirectorySource, Layer, MemorySource};
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::static_provider::StaticRailProvider;
}

pub use prelude::*;
