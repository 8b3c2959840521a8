//! Render-ready map layers.
//!
//! A layer serializes as one plotly `scattermapbox` trace, so the web client
//! can hand the JSON to `Plotly.react` untouched.

use geo::{Coord, Point};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::map::style::{Style, to_hex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum TraceMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesAndMarkers,
}

/// Hover label: one for the whole trace, or one per point
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum HoverText {
    Single(String),
    PerPoint(Vec<String>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapLayer {
    /// `x` is longitude, `y` is latitude
    pub points: Vec<Point>,
    pub mode: TraceMode,
    pub style: Style,
    pub text: HoverText,
}

impl MapLayer {
    /// An ordered line through `coords`, labelled as a whole
    pub fn polyline(
        coords: impl IntoIterator<Item = Coord>,
        mode: TraceMode,
        style: Style,
        label: impl Into<String>,
    ) -> Self {
        Self {
            points: coords.into_iter().map(Point::from).collect(),
            mode,
            style,
            text: HoverText::Single(label.into()),
        }
    }

    /// Scattered markers, each with its own label
    pub fn markers(points: Vec<Point>, labels: Vec<String>, style: Style) -> Self {
        debug_assert_eq!(points.len(), labels.len());
        Self {
            points,
            mode: TraceMode::Markers,
            style,
            text: HoverText::PerPoint(labels),
        }
    }

    /// A single labelled marker
    pub fn marker(point: Point, label: impl Into<String>, style: Style) -> Self {
        Self {
            points: vec![point],
            mode: TraceMode::Markers,
            style,
            text: HoverText::Single(label.into()),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn lats(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y()).collect()
    }

    pub fn lons(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x()).collect()
    }
}

#[derive(serde::Serialize)]
struct Marker {
    color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<f64>,
}

impl Serialize for MapLayer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut trace = serializer.serialize_struct("MapLayer", 9)?;
        trace.serialize_field("type", "scattermapbox")?;
        trace.serialize_field("lat", &self.lats())?;
        trace.serialize_field("lon", &self.lons())?;
        trace.serialize_field("mode", &self.mode)?;
        trace.serialize_field(
            "marker",
            &Marker {
                color: to_hex(self.style.color),
                size: self.style.size,
            },
        )?;
        match self.style.opacity {
            Some(opacity) => trace.serialize_field("opacity", &opacity)?,
            None => trace.skip_field("opacity")?,
        }
        trace.serialize_field("showlegend", &false)?;
        trace.serialize_field("text", &self.text)?;
        trace.serialize_field("hoverinfo", "text")?;
        trace.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::style::{DESTINATION, ROUTE};
    use geo::coord;
    use serde_json::json;

    #[test]
    fn test_polyline_trace_json() {
        let layer = MapLayer::polyline(
            [coord! { x: 77.2, y: 28.6 }, coord! { x: 88.3, y: 22.5 }],
            TraceMode::Lines,
            Style::solid_color(ROUTE).with_size(5.0).with_opacity(0.5),
            "Rajdhani Express",
        );

        assert_eq!(
            serde_json::to_value(&layer).unwrap(),
            json!({
                "type": "scattermapbox",
                "lat": [28.6, 22.5],
                "lon": [77.2, 88.3],
                "mode": "lines",
                "marker": {"color": "#85C1E9", "size": 5.0},
                "opacity": 0.5,
                "showlegend": false,
                "text": "Rajdhani Express",
                "hoverinfo": "text"
            })
        );
    }

    #[test]
    fn test_marker_trace_json() {
        let layer = MapLayer::markers(
            vec![Point::new(73.8, 18.5)],
            vec!["Pune Jn".into()],
            Style::solid_color(DESTINATION),
        );
        let value = serde_json::to_value(&layer).unwrap();

        assert_eq!(value["mode"], "markers");
        assert_eq!(value["text"], json!(["Pune Jn"]));
        assert_eq!(value["marker"], json!({"color": "#D35400"}));
        assert!(value.get("opacity").is_none());
    }

    #[test]
    fn test_lines_and_markers_mode_name() {
        assert_eq!(
            serde_json::to_value(TraceMode::LinesAndMarkers).unwrap(),
            "lines+markers"
        );
    }
}
