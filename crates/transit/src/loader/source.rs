//! Where dataset bytes come from.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::loader::features::{geojson_features, RawFeature};
use crate::loader::shp;
use crate::models::types::{Result, TransitError};

/// Station points, one GeoJSON feature per station
pub const STATIONS_FILE: &str = "states_stations.geojson";
/// State outlines
pub const STATE_BOUNDARIES_FILE: &str = "IND_states.geojson";
/// Train paths with schedule attributes
pub const ROUTES_FILE: &str = "trains_states.geojson";
/// Departure/arrival station name index
pub const STATION_INDEX_FILE: &str = "stations_to_from.json";

/// Subdirectory holding one directory per shapefile layer
pub const SHAPEFILE_DIR: &str = "shape_files";
/// Subdirectory holding the JSON files
pub const JSON_DIR: &str = "json_files";

/// The vector layers a dataset is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Stations,
    StateBoundaries,
    Routes,
}

impl Layer {
    /// GeoJSON file name
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Stations => STATIONS_FILE,
            Self::StateBoundaries => STATE_BOUNDARIES_FILE,
            Self::Routes => ROUTES_FILE,
        }
    }

    /// Shapefile layer (directory) name
    pub fn shapefile_name(self) -> &'static str {
        match self {
            Self::Stations => "states_stations",
            Self::StateBoundaries => "IND_states",
            Self::Routes => "trains_states",
        }
    }
}

/// Read named datasets
pub trait DatasetSource: Send + Sync {
    /// Returns `TransitError::DataNotFound` when the dataset does not exist.
    fn read(&self, name: &str) -> Result<String>;

    /// Features of a vector layer. Reads the layer's GeoJSON file unless the
    /// source knows other encodings.
    fn read_layer(&self, layer: Layer) -> Result<Vec<RawFeature>> {
        geojson_features(&self.read(layer.file_name())?)
    }
}

/// Datasets stored on disk under one root.
///
/// Files are looked up directly under the root first, then in the
/// `json_files/` subdirectory. Layers fall back to shapefiles when no GeoJSON
/// file exists, found as `shape_files/<layer>/`, `<layer>/` or `<layer>.shp`.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn find_file(&self, name: &str) -> Option<PathBuf> {
        [self.root.join(name), self.root.join(JSON_DIR).join(name)]
            .into_iter()
            .find(|path| path.is_file())
    }

    fn find_shapefile(&self, layer: Layer) -> Option<PathBuf> {
        let name = layer.shapefile_name();
        [
            self.root.join(SHAPEFILE_DIR).join(name),
            self.root.join(name),
            self.root.join(format!("{name}.shp")),
        ]
        .into_iter()
        .find_map(|location| shp::shp_path(&location))
    }
}

impl DatasetSource for DirectorySource {
    fn read(&self, name: &str) -> Result<String> {
        let path = self
            .find_file(name)
            .ok_or_else(|| TransitError::DataNotFound(self.root.join(name).display().to_string()))?;
        Ok(std::fs::read_to_string(&path)?)
    }

    fn read_layer(&self, layer: Layer) -> Result<Vec<RawFeature>> {
        if let Some(path) = self.find_file(layer.file_name()) {
            return geojson_features(&std::fs::read_to_string(&path)?);
        }

        match self.find_shapefile(layer) {
            Some(path) => {
                tracing::debug!(?layer, path = %path.display(), "reading shapefile layer");
                shp::read_features(&path)
            }
            None => Err(TransitError::DataNotFound(
                self.root.join(layer.file_name()).display().to_string(),
            )),
        }
    }
}

/// Datasets held in memory, keyed by file name
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }
}

impl DatasetSource for MemorySource {
    fn read(&self, name: &str) -> Result<String> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| TransitError::DataNotFound(name.to_string()))
    }
}
