use serde::Serialize;

use crate::map::{MapView, layer::MapLayer};

/// Height of every rendered map, in pixels
pub const MAP_HEIGHT: u32 = 400;
pub const MAPBOX_STYLE: &str = "carto-positron";

/// A complete plotly figure: traces plus layout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapFigure {
    pub data: Vec<MapLayer>,
    pub layout: MapLayout,
}

impl MapFigure {
    pub fn new(data: Vec<MapLayer>, view: MapView) -> Self {
        Self {
            data,
            layout: MapLayout::new(view),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapLayout {
    pub autosize: bool,
    pub height: u32,
    pub margin: Margin,
    pub mapbox_style: &'static str,
    pub mapbox: Mapbox,
}

impl MapLayout {
    pub fn new(view: MapView) -> Self {
        Self {
            autosize: true,
            height: MAP_HEIGHT,
            margin: Margin {
                l: 10,
                r: 10,
                t: 0,
                b: 0,
            },
            mapbox_style: MAPBOX_STYLE,
            mapbox: Mapbox {
                center: LatLon {
                    lat: view.center.y(),
                    lon: view.center.x(),
                },
                zoom: view.zoom,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mapbox {
    pub center: LatLon,
    pub zoom: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}
