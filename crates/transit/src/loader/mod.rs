//! Dataset loading.
//!
//! Vector layers are read from GeoJSON files or shapefile layers, whichever
//! the [`DatasetSource`] has; the station index is always JSON.
//!
//! Two flavours of every loader exist. `try_load_*` surfaces the error to the
//! caller. `load_*` logs a diagnostic and falls back to an empty dataset, so a
//! server with a missing file still starts and renders empty-state messages.

pub mod features;
pub mod shp;
pub mod source;

pub use features::{
    decode_routes, decode_state_boundaries, decode_stations, geojson_features, parse_routes,
    parse_state_boundaries, parse_station_index, parse_stations, RawFeature,
};
pub use source::{
    DatasetSource, DirectorySource, Layer, MemorySource, JSON_DIR, ROUTES_FILE, SHAPEFILE_DIR,
    STATE_BOUNDARIES_FILE, STATIONS_FILE, STATION_INDEX_FILE,
};

use crate::models::types::*;

pub fn try_load_stations<S: DatasetSource + ?Sized>(source: &S) -> Result<Vec<Station>> {
    Ok(decode_stations(source.read_layer(Layer::Stations)?))
}

pub fn try_load_state_boundaries<S: DatasetSource + ?Sized>(
    source: &S,
) -> Result<Vec<StateBoundary>> {
    Ok(decode_state_boundaries(source.read_layer(Layer::StateBoundaries)?))
}

pub fn try_load_routes<S: DatasetSource + ?Sized>(source: &S) -> Result<Vec<RouteSegment>> {
    Ok(decode_routes(source.read_layer(Layer::Routes)?))
}

pub fn try_load_station_index<S: DatasetSource + ?Sized>(source: &S) -> Result<StationIndex> {
    parse_station_index(&source.read(STATION_INDEX_FILE)?)
}

pub fn load_stations<S: DatasetSource + ?Sized>(source: &S) -> Vec<Station> {
    or_empty(STATIONS_FILE, try_load_stations(source))
}

pub fn load_state_boundaries<S: DatasetSource + ?Sized>(source: &S) -> Vec<StateBoundary> {
    or_empty(STATE_BOUNDARIES_FILE, try_load_state_boundaries(source))
}

pub fn load_routes<S: DatasetSource + ?Sized>(source: &S) -> Vec<RouteSegment> {
    or_empty(ROUTES_FILE, try_load_routes(source))
}

pub fn load_station_index<S: DatasetSource + ?Sized>(source: &S) -> StationIndex {
    or_empty(STATION_INDEX_FILE, try_load_station_index(source))
}

fn or_empty<T: Default>(dataset: &str, result: Result<T>) -> T {
    match result {
        Ok(data) => data,
        Err(TransitError::DataNotFound(location)) => {
            tracing::warn!(dataset, %location, "dataset not found, using an empty dataset");
            T::default()
        }
        Err(err) => {
            tracing::warn!(dataset, %err, "dataset could not be loaded, using an empty dataset");
            T::default()
        }
    }
}
