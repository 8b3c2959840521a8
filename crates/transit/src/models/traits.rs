//! Core traits for rail datasets.
//!
//! Builders only need these seams, so they can run against a plain slice of
//! fixture stations as well as the indexed in-memory provider.

use geo::Point;

use crate::identifiers::*;
use crate::models::types::*;

// ============================================================================
// Lookup Traits
// ============================================================================

/// Resolve a station code to its record
pub trait StationLookup {
    fn station(&self, code: &StationCode) -> Option<&Station>;

    fn location(&self, code: &StationCode) -> Option<Point> {
        self.station(code).map(|s| s.location)
    }
}

/// First station carrying the code wins, matching the dataset order.
impl StationLookup for [Station] {
    fn station(&self, code: &StationCode) -> Option<&Station> {
        self.iter().find(|s| &s.code == code)
    }
}

impl StationLookup for Vec<Station> {
    fn station(&self, code: &StationCode) -> Option<&Station> {
        self.as_slice().station(code)
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Read-only access to every loaded dataset
pub trait RailDataset: StationLookup + Send + Sync {
    fn stations(&self) -> &[Station];
    fn boundaries(&self) -> &[StateBoundary];
    fn routes(&self) -> &[RouteSegment];
    fn station_index(&self) -> &StationIndex;
}
