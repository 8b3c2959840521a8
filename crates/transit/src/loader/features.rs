//! Vector feature decoding.
//!
//! GeoJSON documents and shapefile layers both end up as [`RawFeature`]s,
//! which are then turned into typed records. Property names are the
//! truncated shapefile column names the datasets were exported with
//! (`from_stati`, `to_stati_1`, `first_clas`, ...).

use chrono::NaiveTime;
use geo::{Coord, Geometry, LineString, MultiPolygon};
use geojson::{Feature, GeoJson};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Property Records
// ============================================================================

#[derive(Deserialize)]
struct StationProperties {
    code: String,
    name: String,
    statename: String,
}

#[derive(Deserialize)]
struct BoundaryProperties {
    statename: String,
}

#[derive(Deserialize)]
struct RouteProperties {
    #[serde(rename = "from_stati")]
    from_code: String,
    #[serde(rename = "from_sta_1")]
    from_name: String,
    #[serde(rename = "to_station")]
    to_code: String,
    #[serde(rename = "to_stati_1")]
    to_name: String,
    name: String,
    #[serde(default)]
    arrival: Option<String>,
    #[serde(default)]
    departure: Option<String>,
    #[serde(rename = "first_clas", default, deserialize_with = "lenient_number")]
    first_class: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    sleeper: Option<f64>,
    #[serde(rename = "duration_m", default, deserialize_with = "lenient_number")]
    duration_minutes: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    distance: Option<f64>,
}

/// Numbers arrive as JSON numbers, numeric strings, or "None"
fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

fn parse_time(value: Option<&str>) -> Option<NaiveTime> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|err| tracing::debug!(value, %err, "unparsable schedule time"))
        .ok()
}

// ============================================================================
// Raw Features
// ============================================================================

/// Attribute table row plus geometry of one vector feature, independent of
/// the file format it was read from
#[derive(Clone, Debug, PartialEq)]
pub struct RawFeature {
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl RawFeature {
    fn from_geojson(feature: Feature) -> Result<Self> {
        let geometry = feature
            .geometry
            .ok_or_else(|| TransitError::InvalidData("feature has no geometry".into()))?;

        Ok(Self {
            properties: feature.properties.unwrap_or_default(),
            geometry: Geometry::try_from(geometry.value)?,
        })
    }

    fn properties<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.properties.clone()))?)
    }
}

/// Decode a GeoJSON document into raw features, skipping the ones whose
/// geometry cannot be represented
pub fn geojson_features(content: &str) -> Result<Vec<RawFeature>> {
    let features = match content.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => collection.features,
        GeoJson::Feature(feature) => vec![feature],
        GeoJson::Geometry(_) => {
            return Err(TransitError::InvalidData(
                "expected features, found a bare geometry".into(),
            ))
        }
    };

    Ok(features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| match RawFeature::from_geojson(feature) {
            Ok(raw) => Some(raw),
            Err(err) => {
                tracing::warn!(index, %err, "skipping feature without usable geometry");
                None
            }
        })
        .collect())
}

// ============================================================================
// Typed Conversion
// ============================================================================

fn station_from_feature(feature: RawFeature) -> Result<Station> {
    let props: StationProperties = feature.properties()?;
    let location = match feature.geometry {
        Geometry::Point(point) => point,
        // shapefile point layers are sometimes exported as single-part multipoints
        Geometry::MultiPoint(points) if points.0.len() == 1 => points.0[0],
        _ => {
            return Err(TransitError::InvalidData(format!(
                "station {} is not a Point",
                props.code
            )))
        }
    };

    Ok(Station::new(props.code, props.name, props.statename, location))
}

fn boundary_from_feature(feature: RawFeature) -> Result<StateBoundary> {
    let props: BoundaryProperties = feature.properties()?;
    let shape = match feature.geometry {
        Geometry::Polygon(polygon) => MultiPolygon::new(vec![polygon]),
        Geometry::MultiPolygon(multi) => multi,
        _ => {
            return Err(TransitError::InvalidData(format!(
                "boundary of {} is not a Polygon or MultiPolygon",
                props.statename
            )))
        }
    };

    Ok(StateBoundary {
        state: StateName::new(props.statename),
        shape,
    })
}

/// Multi-part paths are joined end to end
fn route_path(geometry: Geometry) -> Option<LineString> {
    let mut coords: Vec<Coord> = match geometry {
        Geometry::LineString(line) => line.0,
        Geometry::MultiLineString(lines) => lines.0.into_iter().flat_map(|line| line.0).collect(),
        _ => return None,
    };
    coords.dedup();

    (coords.len() >= 2).then(|| LineString::new(coords))
}

fn route_from_feature(feature: RawFeature) -> Result<RouteSegment> {
    let props: RouteProperties = feature.properties()?;
    let path = route_path(feature.geometry).ok_or_else(|| {
        TransitError::InvalidData(format!(
            "route {} has no path with at least two vertices",
            props.name
        ))
    })?;

    let schedule = Schedule {
        arrival: parse_time(props.arrival.as_deref()),
        departure: parse_time(props.departure.as_deref()),
        first_class_fare: props.first_class,
        duration_minutes: props.duration_minutes,
        sleeper_fare: props.sleeper,
        distance_km: props.distance,
    };

    Ok(RouteSegment {
        from_code: StationCode::new(props.from_code),
        from_name: props.from_name.into(),
        to_code: StationCode::new(props.to_code),
        to_name: props.to_name.into(),
        name: props.name.into(),
        path,
        schedule,
    })
}

/// Convert every feature, skipping (and logging) the ones that do not fit
fn collect_features<T>(
    features: Vec<RawFeature>,
    kind: &'static str,
    convert: impl Fn(RawFeature) -> Result<T>,
) -> Vec<T> {
    let total = features.len();

    let items: Vec<T> = features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| match convert(feature) {
            Ok(item) => Some(item),
            Err(err) => {
                tracing::warn!(kind, index, %err, "skipping malformed feature");
                None
            }
        })
        .collect();

    if items.len() < total {
        tracing::warn!(kind, skipped = total - items.len(), total, "dataset had malformed features");
    }

    items
}

// ============================================================================
// Public Decoders
// ============================================================================

pub fn decode_stations(features: Vec<RawFeature>) -> Vec<Station> {
    collect_features(features, "station", station_from_feature)
}

pub fn decode_state_boundaries(features: Vec<RawFeature>) -> Vec<StateBoundary> {
    collect_features(features, "state boundary", boundary_from_feature)
}

pub fn decode_routes(features: Vec<RawFeature>) -> Vec<RouteSegment> {
    collect_features(features, "route", route_from_feature)
}

pub fn parse_stations(content: &str) -> Result<Vec<Station>> {
    Ok(decode_stations(geojson_features(content)?))
}

pub fn parse_state_boundaries(content: &str) -> Result<Vec<StateBoundary>> {
    Ok(decode_state_boundaries(geojson_features(content)?))
}

pub fn parse_routes(content: &str) -> Result<Vec<RouteSegment>> {
    Ok(decode_routes(geojson_features(content)?))
}

pub fn parse_station_index(content: &str) -> Result<StationIndex> {
    Ok(serde_json::from_str(content)?)
}
