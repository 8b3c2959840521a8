//! ESRI shapefile layers.
//!
//! The station, state and train datasets are distributed as shapefile
//! directories (`.shp` geometry, `.dbf` attribute table, `.shx` index). Each
//! shape and its attribute row become one [`RawFeature`].

use std::path::{Path, PathBuf};

use ::shapefile::dbase::{FieldValue, Record};
use ::shapefile::{Reader, Shape};
use geo::Geometry;
use serde_json::{Map, Number, Value};

use crate::loader::features::RawFeature;
use crate::models::types::{Result, TransitError};

/// Attribute columns any dataset reads; everything else in the table is ignored
const COLUMNS: &[&str] = &[
    "code",
    "name",
    "statename",
    "from_stati",
    "from_sta_1",
    "to_station",
    "to_stati_1",
    "arrival",
    "departure",
    "first_clas",
    "sleeper",
    "duration_m",
    "distance",
];

/// Resolve a layer location to its `.shp` file.
///
/// `location` may be the `.shp` file itself or a directory holding one, the
/// way shapefiles are usually shipped. Within a directory the first `.shp`
/// by name is used.
pub fn shp_path(location: &Path) -> Option<PathBuf> {
    if location.is_file() {
        return is_shp(location).then(|| location.to_path_buf());
    }

    let mut candidates: Vec<PathBuf> = std::fs::read_dir(location)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_shp(path))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}

fn is_shp(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("shp"))
}

/// Read every shape and attribute row of a layer.
///
/// Records that cannot be decoded, and null shapes, are skipped with a
/// warning.
pub fn read_features(location: &Path) -> Result<Vec<RawFeature>> {
    let path = shp_path(location)
        .ok_or_else(|| TransitError::DataNotFound(location.display().to_string()))?;

    let mut reader = Reader::from_path(&path)?;
    let mut features = Vec::new();

    for (index, item) in reader.iter_shapes_and_records().enumerate() {
        let feature = item
            .map_err(TransitError::from)
            .and_then(|(shape, record)| feature(shape, &record));

        match feature {
            Ok(feature) => features.push(feature),
            Err(err) => {
                tracing::warn!(path = %path.display(), index, %err, "skipping unreadable shape");
            }
        }
    }

    tracing::debug!(path = %path.display(), count = features.len(), "read shapefile layer");
    Ok(features)
}

fn feature(shape: Shape, record: &Record) -> Result<RawFeature> {
    let geometry = Geometry::<f64>::try_from(shape)
        .map_err(|err| TransitError::InvalidData(err.to_string()))?;

    Ok(RawFeature {
        properties: attributes(record),
        geometry,
    })
}

fn attributes(record: &Record) -> Map<String, Value> {
    COLUMNS
        .iter()
        .filter_map(|&column| {
            record
                .get(column)
                .map(|value| (column.to_string(), field_value(value)))
        })
        .collect()
}

/// dBASE values as the JSON values the property records deserialize from
fn field_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Character(Some(text)) | FieldValue::Memo(text) => {
            Value::String(text.trim().to_string())
        }
        FieldValue::Numeric(Some(n)) | FieldValue::Double(n) | FieldValue::Currency(n) => number(*n),
        FieldValue::Float(Some(n)) => number(f64::from(*n)),
        FieldValue::Integer(n) => Value::from(*n),
        _ => Value::Null,
    }
}

fn number(n: f64) -> Value {
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}
