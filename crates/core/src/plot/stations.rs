//! Station maps, per state or for the whole country.

use crate::map::{
    COUNTRY_CENTER, MapFigure, MapLayer, MapView, STATE_ZOOM, Style, TraceMode,
    style::{BOUNDARY_OUTLINE, STATION},
};
use crate::plot::selection::Selection;
use crate::transit::{StateBoundary, Station, spatial::mean_center};

pub const COUNTRY_TITLE: &str = "India";

const COUNTRY_MARKER_SIZE: f64 = 4.0;
const STATE_MARKER_SIZE: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct StationMap {
    pub title: String,
    /// Boundary outlines first, station markers last
    pub layers: Vec<MapLayer>,
    pub view: MapView,
}

impl StationMap {
    pub fn to_figure(&self) -> MapFigure {
        MapFigure::new(self.layers.clone(), self.view)
    }
}

/// Map every station of `state_name`, or of the whole country for `All`.
///
/// Returns `None` when no state is selected. Boundary outlines are only drawn
/// for a single state, and only when `show_boundary` is set and boundaries are
/// supplied.
pub fn build_station_map(
    stations: &[Station],
    state_name: &str,
    boundaries: Option<&[StateBoundary]>,
    show_boundary: bool,
) -> Option<StationMap> {
    let selection = Selection::parse(state_name)?;

    let selected: Vec<&Station> = stations
        .iter()
        .filter(|s| selection.matches(s.state.as_str()))
        .collect();

    let (title, view, marker_size) = match selection {
        Selection::All => (
            COUNTRY_TITLE.to_string(),
            MapView::country(),
            COUNTRY_MARKER_SIZE,
        ),
        Selection::One(state) => {
            let center = mean_center(selected.iter().map(|s| s.location)).unwrap_or_else(|| {
                tracing::debug!(state, "state has no stations, centering on the country");
                COUNTRY_CENTER
            });
            (state.to_string(), MapView::new(center, STATE_ZOOM), STATE_MARKER_SIZE)
        }
    };

    let mut layers = Vec::new();

    if let (Selection::One(state), true, Some(boundaries)) = (selection, show_boundary, boundaries)
    {
        let rings = boundaries
            .iter()
            .filter(|b| b.state == *state)
            .flat_map(StateBoundary::exterior_rings);

        for ring in rings {
            layers.push(MapLayer::polyline(
                ring.coords().copied(),
                TraceMode::Lines,
                Style::solid_color(BOUNDARY_OUTLINE),
                state,
            ));
        }
    }

    let (points, labels) = selected
        .iter()
        .map(|s| (s.location, s.name.to_string()))
        .unzip();
    layers.push(MapLayer::markers(
        points,
        labels,
        Style::solid_color(STATION).with_size(marker_size),
    ));

    Some(StationMap {
        title,
        layers,
        view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{COUNTRY_ZOOM, HoverText, style::to_hex};
    use crate::test_fixtures;
    use approx::assert_relative_eq;
    use geo::Point;

    #[test]
    fn test_single_state_centered_on_mean() {
        let stations = vec![
            Station::new("A", "A", "X", Point::new(20.0, 10.0)),
            Station::new("B", "B", "X", Point::new(22.0, 12.0)),
            Station::new("C", "C", "Y", Point::new(80.0, 30.0)),
        ];

        let map = build_station_map(&stations, "X", None, false).unwrap();

        assert_eq!(map.title, "X");
        assert_eq!(map.view.zoom, STATE_ZOOM);
        assert_relative_eq!(map.view.center.y(), 11.0);
        assert_relative_eq!(map.view.center.x(), 21.0);

        assert_eq!(map.layers.len(), 1);
        let markers = &map.layers[0];
        assert_eq!(markers.mode, TraceMode::Markers);
        assert_eq!(markers.style.size, Some(STATE_MARKER_SIZE));
        assert_eq!(
            markers.text,
            HoverText::PerPoint(vec!["A".into(), "B".into()])
        );
    }

    #[test]
    fn test_all_covers_country_and_ignores_boundary() {
        let stations = test_fixtures::stations();
        let boundaries = test_fixtures::boundaries();

        let map = build_station_map(&stations, "All", Some(&boundaries), true).unwrap();

        assert_eq!(map.title, COUNTRY_TITLE);
        assert_eq!(map.view.center, COUNTRY_CENTER);
        assert_eq!(map.view.zoom, COUNTRY_ZOOM);
        assert_eq!(map.layers.len(), 1);
        assert_eq!(map.layers[0].vertex_count(), stations.len());
        assert_eq!(map.layers[0].style.size, Some(COUNTRY_MARKER_SIZE));
    }

    #[test]
    fn test_boundary_outlines_per_sub_polygon() {
        let stations = test_fixtures::stations();
        let boundaries = test_fixtures::boundaries();

        let map = build_station_map(&stations, "West Bengal", Some(&boundaries), true).unwrap();

        // Two outline rings, then the markers
        assert_eq!(map.layers.len(), 3);
        for outline in &map.layers[..2] {
            assert_eq!(outline.mode, TraceMode::Lines);
            assert_eq!(to_hex(outline.style.color), "#808B96");
            assert_eq!(outline.text, HoverText::Single("West Bengal".into()));
        }
        // Exterior rings come back closed
        assert_eq!(map.layers[0].vertex_count(), 4);

        let markers = map.layers.last().unwrap();
        assert_eq!(to_hex(markers.style.color), "#85C1E9");
        assert_eq!(markers.text, HoverText::PerPoint(vec!["Howrah Jn".into()]));
    }

    #[test]
    fn test_boundary_needs_toggle_and_dataset() {
        let stations = test_fixtures::stations();
        let boundaries = test_fixtures::boundaries();

        let hidden = build_station_map(&stations, "Goa", Some(&boundaries), false).unwrap();
        assert_eq!(hidden.layers.len(), 1);

        let missing = build_station_map(&stations, "Goa", None, true).unwrap();
        assert_eq!(missing.layers.len(), 1);

        let shown = build_station_map(&stations, "Goa", Some(&boundaries), true).unwrap();
        assert_eq!(shown.layers.len(), 2);
    }

    #[test]
    fn test_state_without_stations_falls_back_to_country_center() {
        let stations = test_fixtures::stations();

        let map = build_station_map(&stations, "Mizoram", None, false).unwrap();
        assert_eq!(map.title, "Mizoram");
        assert_eq!(map.view.center, COUNTRY_CENTER);
        assert_eq!(map.layers[0].vertex_count(), 0);
    }

    #[test]
    fn test_empty_state_renders_nothing() {
        let stations = test_fixtures::stations();
        assert!(build_station_map(&stations, "", None, true).is_none());
    }

    #[test]
    fn test_builder_is_idempotent() {
        let stations = test_fixtures::stations();
        let boundaries = test_fixtures::boundaries();

        let first = build_station_map(&stations, "Goa", Some(&boundaries), true);
        let second = build_station_map(&stations, "Goa", Some(&boundaries), true);
        assert_eq!(first, second);
    }
}
