//! In-memory rail provider.
//!
//! Holds every dataset loaded at startup, plus a station-code lookup map.
//! Nothing is mutated after construction.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::*;
use crate::loader::{self, DatasetSource};
use crate::models::{traits::*, types::*};

/// Read-only handle over the loaded datasets
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Debug)]
pub struct StaticRailProvider {
    // Core data
    stations: Arc<[Station]>,
    boundaries: Arc<[StateBoundary]>,
    routes: Arc<[RouteSegment]>,
    station_index: Arc<StationIndex>,

    // Lookup map: station code -> position in `stations`
    station_map: Arc<HashMap<StationCode, usize>>,
}

impl StaticRailProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::from_data(Vec::new(), Vec::new(), Vec::new(), StationIndex::default())
    }

    /// Build provider from already decoded data
    pub fn from_data(
        stations: Vec<Station>,
        boundaries: Vec<StateBoundary>,
        routes: Vec<RouteSegment>,
        station_index: StationIndex,
    ) -> Self {
        // Duplicate codes resolve to the first station, like a linear scan would
        let mut station_map = HashMap::with_capacity(stations.len());
        for (position, station) in stations.iter().enumerate() {
            station_map.entry(station.code.clone()).or_insert(position);
        }

        Self {
            stations: stations.into(),
            boundaries: boundaries.into(),
            routes: routes.into(),
            station_index: Arc::new(station_index),
            station_map: Arc::new(station_map),
        }
    }

    /// Load every dataset, degrading missing ones to empty collections
    ///
    /// When the station index file is absent it is derived from the routes.
    pub fn load<S: DatasetSource + ?Sized>(source: &S) -> Self {
        let stations = loader::load_stations(source);
        let boundaries = loader::load_state_boundaries(source);
        let routes = loader::load_routes(source);

        let mut station_index = loader::load_station_index(source);
        if station_index.is_empty() && !routes.is_empty() {
            tracing::info!("deriving station index from {} routes", routes.len());
            station_index = StationIndex::from_routes(&routes);
        }

        tracing::info!(
            stations = stations.len(),
            boundaries = boundaries.len(),
            routes = routes.len(),
            from_stations = station_index.from_stations.len(),
            "rail datasets loaded"
        );

        Self::from_data(stations, boundaries, routes, station_index)
    }
}

impl Default for StaticRailProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StationLookup for StaticRailProvider {
    fn station(&self, code: &StationCode) -> Option<&Station> {
        self.station_map
            .get(code)
            .and_then(|&position| self.stations.get(position))
    }
}

impl RailDataset for StaticRailProvider {
    fn stations(&self) -> &[Station] {
        &self.stations
    }

    fn boundaries(&self) -> &[StateBoundary] {
        &self.boundaries
    }

    fn routes(&self) -> &[RouteSegment] {
        &self.routes
    }

    fn station_index(&self) -> &StationIndex {
        &self.station_index
    }
}
