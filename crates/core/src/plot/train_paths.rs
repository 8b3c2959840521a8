//! Train path maps between a departure station and its destinations.

use geo::Point;

use crate::map::{
    COUNTRY_CENTER, MapFigure, MapLayer, MapView, ROUTE_ZOOM, Style, TraceMode,
    style::{DESTINATION, ORIGIN, ROUTE},
};
use crate::plot::{PlotError, routes::resolve_routes};
use crate::transit::{RouteSegment, StationLookup};

const ROUTE_SIZE: f64 = 5.0;
const ROUTE_OPACITY: f64 = 0.7;
const DESTINATION_SIZE: f64 = 8.0;
const ORIGIN_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RouteMap {
    /// Route lines, then destination markers, then the origin marker
    pub layers: Vec<MapLayer>,
    pub view: MapView,
}

impl RouteMap {
    pub fn to_figure(&self) -> MapFigure {
        MapFigure::new(self.layers.clone(), self.view)
    }
}

/// Plot every route from `from_station` to `to_station` (or to all
/// destinations).
///
/// With `show_stops` each route follows its full path with a marker per
/// vertex; without it each route is a straight line between its endpoints.
/// Stations missing from `stations` lose their marker; a missing origin
/// centers the map on the country instead.
pub fn build_route_map<S: StationLookup + ?Sized>(
    from_station: &str,
    to_station: &str,
    show_stops: bool,
    routes: &[RouteSegment],
    stations: &S,
) -> Result<RouteMap, PlotError> {
    let resolved = resolve_routes(routes, from_station, to_station);
    let first = resolved.first().ok_or_else(|| PlotError::RouteNotFound {
        from: from_station.to_string(),
        to: to_station.to_string(),
    })?;

    let center = stations.location(&first.from_code).unwrap_or_else(|| {
        tracing::debug!(code = %first.from_code, "origin station has no location, centering on the country");
        COUNTRY_CENTER
    });

    let route_style = Style::solid_color(ROUTE)
        .with_size(ROUTE_SIZE)
        .with_opacity(ROUTE_OPACITY);

    let mut layers: Vec<MapLayer> = resolved
        .iter()
        .map(|route| route_layer(route, show_stops, route_style))
        .collect();

    let (points, labels): (Vec<Point>, Vec<String>) = resolved
        .iter()
        .filter_map(|route| match stations.location(&route.to_code) {
            Some(location) => Some((location, route.to_name.to_string())),
            None => {
                tracing::debug!(
                    code = %route.to_code,
                    station = %route.to_name,
                    "destination station has no location, skipping its marker"
                );
                None
            }
        })
        .unzip();

    layers.push(MapLayer::markers(
        points,
        labels,
        Style::solid_color(DESTINATION).with_size(DESTINATION_SIZE),
    ));
    layers.push(MapLayer::marker(
        center,
        from_station,
        Style::solid_color(ORIGIN).with_size(ORIGIN_SIZE),
    ));

    Ok(RouteMap {
        layers,
        view: MapView::new(center, ROUTE_ZOOM),
    })
}

fn route_layer(route: &RouteSegment, show_stops: bool, style: Style) -> MapLayer {
    if show_stops {
        MapLayer::polyline(
            route.path.coords().copied(),
            TraceMode::LinesAndMarkers,
            style,
            &*route.name,
        )
    } else {
        MapLayer::polyline(
            route.origin().into_iter().chain(route.destination()),
            TraceMode::Lines,
            style,
            &*route.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{HoverText, style::to_hex};
    use crate::test_fixtures;

    #[test]
    fn test_show_stops_traces_full_path() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let map = build_route_map("New Delhi", "Howrah Jn", true, &routes, &stations).unwrap();

        // Two routes, destinations, origin
        assert_eq!(map.layers.len(), 4);
        assert_eq!(map.layers[0].vertex_count(), 4);
        assert_eq!(map.layers[1].vertex_count(), 3);
        for line in &map.layers[..2] {
            assert_eq!(line.mode, TraceMode::LinesAndMarkers);
            assert_eq!(line.style.opacity, Some(ROUTE_OPACITY));
        }
        assert_eq!(
            map.layers[0].text,
            HoverText::Single("Rajdhani Express".into())
        );
    }

    #[test]
    fn test_hidden_stops_draw_endpoint_segments() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let map = build_route_map("New Delhi", "All", false, &routes, &stations).unwrap();

        let lines = &map.layers[..4];
        for line in lines {
            assert_eq!(line.vertex_count(), 2);
            assert_eq!(line.mode, TraceMode::Lines);
        }
        // First and last vertex of the Rajdhani path
        assert_eq!(lines[0].points, vec![Point::new(77.0, 28.0), Point::new(88.3, 22.6)]);
    }

    #[test]
    fn test_layer_order_and_endpoint_markers() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let map = build_route_map("New Delhi", "All", true, &routes, &stations).unwrap();
        assert_eq!(map.layers.len(), 6);

        // Patna has no station record, so only three destination markers
        let destinations = &map.layers[4];
        assert_eq!(to_hex(destinations.style.color), "#D35400");
        assert_eq!(destinations.style.size, Some(DESTINATION_SIZE));
        assert_eq!(
            destinations.text,
            HoverText::PerPoint(vec![
                "Howrah Jn".into(),
                "Kanpur Central".into(),
                "Howrah Jn".into()
            ])
        );

        let origin = &map.layers[5];
        assert_eq!(to_hex(origin.style.color), "#7D3C98");
        assert_eq!(origin.style.size, Some(ORIGIN_SIZE));
        assert_eq!(origin.points, vec![Point::new(77.0, 28.0)]);
        assert_eq!(origin.text, HoverText::Single("New Delhi".into()));
    }

    #[test]
    fn test_centered_on_origin() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let map = build_route_map("Madgaon", "New Delhi", false, &routes, &stations).unwrap();
        assert_eq!(map.view, MapView::new(Point::new(74.0, 15.3), ROUTE_ZOOM));
    }

    #[test]
    fn test_unknown_origin_falls_back_to_country_center() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let map = build_route_map("Ghost Halt", "All", true, &routes, &stations).unwrap();
        assert_eq!(map.view.center, COUNTRY_CENTER);
        assert_eq!(map.layers.last().unwrap().points, vec![COUNTRY_CENTER]);
        assert_eq!(map.view.zoom, ROUTE_ZOOM);
    }

    #[test]
    fn test_no_routes_is_an_error() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let err = build_route_map("New Delhi", "Madgaon", true, &routes, &stations).unwrap_err();
        assert_eq!(
            err,
            PlotError::RouteNotFound {
                from: "New Delhi".into(),
                to: "Madgaon".into()
            }
        );
    }

    #[test]
    fn test_provider_lookup_matches_slice_lookup() {
        let provider = test_fixtures::provider();
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        let from_slice = build_route_map("New Delhi", "All", true, &routes, &stations);
        let from_provider = build_route_map("New Delhi", "All", true, &routes, &provider);
        assert_eq!(from_slice, from_provider);
    }

    #[test]
    fn test_builder_is_idempotent() {
        let routes = test_fixtures::routes();
        let stations = test_fixtures::stations();

        for (to, show_stops) in [("Howrah Jn", true), ("All", false)] {
            let first = build_route_map("New Delhi", to, show_stops, &routes, &stations);
            let second = build_route_map("New Delhi", to, show_stops, &routes, &stations);
            assert!(first.is_ok());
            assert_eq!(first, second);
            assert_eq!(
                first.map(|map| map.to_figure()),
                second.map(|map| map.to_figure())
            );
        }
    }
}
