pub mod figure;
pub mod layer;
pub mod style;

use geo::{Coord, Point};

pub use figure::MapFigure;
pub use layer::{HoverText, MapLayer, TraceMode};
pub use style::Style;

/// Geographic center of India. Frames the country-wide view and stands in
/// when a station location cannot be resolved.
pub const COUNTRY_CENTER: Point = Point(Coord {
    x: 78.9629,
    y: 20.5937,
});

pub const COUNTRY_ZOOM: u8 = 4;
pub const STATE_ZOOM: u8 = 6;
pub const ROUTE_ZOOM: u8 = 5;

/// Where the map camera points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    pub center: Point,
    pub zoom: u8,
}

impl MapView {
    pub fn new(center: Point, zoom: u8) -> Self {
        Self { center, zoom }
    }

    pub fn country() -> Self {
        Self::new(COUNTRY_CENTER, COUNTRY_ZOOM)
    }
}
