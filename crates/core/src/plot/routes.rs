//! Route resolution by departure and arrival station name.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::plot::selection::{ALL, Selection};
use crate::transit::RouteSegment;

/// Routes departing `from_station`, narrowed to `to_station` unless it is `All`.
///
/// Keeps dataset order. An empty result is a normal outcome.
pub fn resolve_routes<'a>(
    routes: &'a [RouteSegment],
    from_station: &str,
    to_station: &str,
) -> Vec<&'a RouteSegment> {
    let to = Selection::from(to_station);

    routes
        .iter()
        .filter(|r| &*r.from_name == from_station)
        .filter(|r| to.matches(&r.to_name))
        .collect()
}

/// Distinct destination names reachable from `from_station`, sorted
pub fn list_destinations(routes: &[RouteSegment], from_station: &str) -> BTreeSet<String> {
    resolve_routes(routes, from_station, ALL)
        .into_iter()
        .map(|r| r.to_name.to_string())
        .collect()
}

/// Options for the destination selector and the value it should show
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DestinationChoice {
    pub options: Vec<String>,
    pub selected: String,
}

/// A single destination is picked outright; otherwise `All` leads the list.
pub fn destination_choice(routes: &[RouteSegment], from_station: &str) -> DestinationChoice {
    let destinations = list_destinations(routes, from_station);

    if destinations.len() == 1 {
        let options: Vec<String> = destinations.into_iter().collect();
        let selected = options[0].clone();
        return DestinationChoice { options, selected };
    }

    let options = std::iter::once(ALL.to_string())
        .chain(destinations)
        .collect();

    DestinationChoice {
        options,
        selected: ALL.to_string(),
    }
}
