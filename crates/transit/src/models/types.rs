//! Core data types for the rail datasets.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveTime;
use geo::{Coord, LineString, MultiPolygon, Point};
use serde::{Deserialize, Serialize};

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// A railway station.
///
/// `location` follows the GeoJSON axis order: `x` is longitude, `y` is latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub code: StationCode,
    pub name: Arc<str>,
    pub state: StateName,
    pub location: Point,
}

impl Station {
    pub fn new(
        code: impl Into<StationCode>,
        name: impl AsRef<str>,
        state: impl Into<StateName>,
        location: Point,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.as_ref().into(),
            state: state.into(),
            location,
        }
    }
}

/// Administrative outline of a state.
///
/// Single polygons are stored as a one-element multipolygon.
#[derive(Clone, Debug, PartialEq)]
pub struct StateBoundary {
    pub state: StateName,
    pub shape: MultiPolygon,
}

impl StateBoundary {
    /// Exterior ring of every sub-polygon, in dataset order
    pub fn exterior_rings(&self) -> impl Iterator<Item = &LineString> {
        self.shape.iter().map(|polygon| polygon.exterior())
    }
}

/// Timetable attributes of a route segment.
///
/// Every field is optional: the source data has gaps for unreserved and
/// suburban services.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schedule {
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
    pub first_class_fare: Option<f64>,
    pub duration_minutes: Option<f64>,
    pub sleeper_fare: Option<f64>,
    pub distance_km: Option<f64>,
}

/// One scheduled service between an origin and a destination station.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteSegment {
    pub from_code: StationCode,
    pub from_name: Arc<str>,
    pub to_code: StationCode,
    pub to_name: Arc<str>,
    /// Display name of the train
    pub name: Arc<str>,
    /// Physical path, origin first. Always holds at least two vertices.
    pub path: LineString,
    pub schedule: Schedule,
}

impl RouteSegment {
    pub fn origin(&self) -> Option<Coord> {
        self.path.0.first().copied()
    }

    pub fn destination(&self) -> Option<Coord> {
        self.path.0.last().copied()
    }
}

/// Departure and arrival station names offered by the UI selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationIndex {
    pub from_stations: BTreeSet<String>,
    #[serde(default)]
    pub to_stations: BTreeSet<String>,
}

impl StationIndex {
    /// Derive the index from the route dataset
    pub fn from_routes<'a>(routes: impl IntoIterator<Item = &'a RouteSegment>) -> Self {
        let mut index = Self::default();
        for route in routes {
            index.from_stations.insert(route.from_name.to_string());
            index.to_stations.insert(route.to_name.to_string());
        }
        index
    }

    pub fn is_empty(&self) -> bool {
        self.from_stations.is_empty()
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Dataset not found: {0}")]
    DataNotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("Shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{coord, polygon, MultiPolygon};

    fn route(from: &str, to: &str) -> RouteSegment {
        RouteSegment {
            from_code: StationCode::new(from),
            from_name: from.into(),
            to_code: StationCode::new(to),
            to_name: to.into(),
            name: format!("{from}-{to} Express").into(),
            path: LineString::from(vec![(77.2, 28.6), (78.0, 27.2), (80.3, 26.4)]),
            schedule: Schedule::default(),
        }
    }

    #[test]
    fn test_route_endpoints() {
        let r = route("NDLS", "CNB");
        assert_eq!(r.origin(), Some(coord! { x: 77.2, y: 28.6 }));
        assert_eq!(r.destination(), Some(coord! { x: 80.3, y: 26.4 }));
    }

    #[test]
    fn test_exterior_rings_per_polygon() {
        let a = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        let b = polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)];
        let boundary = StateBoundary {
            state: StateName::new("Goa"),
            shape: MultiPolygon::new(vec![a.clone(), b.clone()]),
        };

        let rings: Vec<_> = boundary.exterior_rings().collect();
        assert_eq!(rings, vec![a.exterior(), b.exterior()]);
    }

    #[test]
    fn test_station_index_from_routes_dedups() {
        let routes = vec![route("A", "B"), route("A", "C"), route("D", "B")];
        let index = StationIndex::from_routes(&routes);

        assert_eq!(
            index.from_stations.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "D"]
        );
        assert_eq!(
            index.to_stations.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["B", "C"]
        );
    }

    #[test]
    fn test_station_index_parses_missing_to_stations() {
        let index: StationIndex =
            serde_json::from_str(r#"{"from_stations": ["B", "A", "B"]}"#).unwrap();
        assert_eq!(index.from_stations.len(), 2);
        assert!(index.to_stations.is_empty());
    }
}
