//! Map and table builders.
//!
//! Every builder is a pure function of the datasets it is handed: nothing is
//! cached, and nothing outside the returned value is touched.

pub mod routes;
pub mod schedule;
pub mod selection;
pub mod stations;
pub mod train_paths;

pub use routes::{DestinationChoice, destination_choice, list_destinations, resolve_routes};
pub use schedule::{ScheduleColumn, ScheduleRow, ScheduleTable, build_schedule_table};
pub use selection::{ALL, Selection};
pub use stations::{StationMap, build_station_map};
pub use train_paths::{RouteMap, build_route_map};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlotError {
    #[error("No trains run from {from} to {to}.")]
    RouteNotFound { from: String, to: String },

    #[error("The information cannot be displayed for `All` the stations.")]
    AmbiguousSelection,
}
