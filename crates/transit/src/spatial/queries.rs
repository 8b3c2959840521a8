//! Spatial helpers used when framing maps.

use geo::{Centroid, MultiPoint, Point};

/// Arithmetic mean of the given locations, `None` when there are none
pub fn mean_center(points: impl IntoIterator<Item = Point>) -> Option<Point> {
    MultiPoint::from_iter(points).centroid()
}
