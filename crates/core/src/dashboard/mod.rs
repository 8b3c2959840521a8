//! UI-agnostic dashboard controller.
//!
//! Reads the current selector values, calls the builders, and turns their
//! errors into the messages the panels display. Any front-end (HTTP, TUI,
//! tests) drives the dashboard through these calls alone.

pub mod panels;

use std::sync::Arc;

use crate::map::MapFigure;
use crate::plot::{
    self, DestinationChoice, PlotError, ScheduleTable, Selection, build_route_map,
    build_schedule_table, build_station_map,
};
use crate::transit::RailDataset;

pub use panels::{InfoPanel, MapPanel, StationsPanel, TrainsPanel};

/// Entries of the state selector
pub const STATES: [&str; 30] = [
    "All",
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chandigarh",
    "Chattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jammu and Kashmir",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Mizoram",
    "NCT of Delhi",
    "Nagaland",
    "Odisha",
    "Pondicherry",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttrakhand",
    "West Bengal",
];

/// Cheap to clone; all clones share the loaded datasets.
#[derive(Clone)]
pub struct Dashboard {
    data: Arc<dyn RailDataset>,
}

impl Dashboard {
    pub fn new(data: Arc<dyn RailDataset>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &dyn RailDataset {
        self.data.as_ref()
    }

    pub fn states(&self) -> &'static [&'static str] {
        &STATES
    }

    /// Departure station choices, sorted
    pub fn from_stations(&self) -> Vec<String> {
        self.data
            .station_index()
            .from_stations
            .iter()
            .cloned()
            .collect()
    }

    pub fn destinations(&self, from_station: &str) -> DestinationChoice {
        plot::destination_choice(self.data.routes(), from_station)
    }

    /// `None` until a state is selected
    pub fn stations_panel(&self, state_name: &str, show_boundary: bool) -> Option<StationsPanel> {
        let map = build_station_map(
            self.data.stations(),
            state_name,
            Some(self.data.boundaries()),
            show_boundary,
        )?;

        Some(StationsPanel {
            figure: map.to_figure(),
            title: map.title,
        })
    }

    pub fn route_map(
        &self,
        from_station: &str,
        to_station: &str,
        show_stops: bool,
    ) -> Result<MapFigure, PlotError> {
        build_route_map(
            from_station,
            to_station,
            show_stops,
            self.data.routes(),
            self.data.as_ref(),
        )
        .map(|map| map.to_figure())
    }

    pub fn schedule(&self, from_station: &str, to_station: &str) -> Result<ScheduleTable, PlotError> {
        build_schedule_table(from_station, to_station, self.data.routes())
    }

    pub fn trains_panel(&self, from_station: &str, to_station: &str, show_stops: bool) -> TrainsPanel {
        if Selection::parse(from_station).is_none() || Selection::parse(to_station).is_none() {
            return TrainsPanel {
                map: MapPanel::message(panels::FROM_AND_TO_REQUIRED),
                info: InfoPanel::message(panels::INFO_NEEDS_FROM),
            };
        }

        let map = match self.route_map(from_station, to_station, show_stops) {
            Ok(figure) => MapPanel::Figure {
                caption: format!("{from_station} - {to_station}"),
                figure,
            },
            Err(err) => {
                tracing::debug!(from_station, to_station, %err, "no route map");
                MapPanel::message(err.to_string())
            }
        };

        let info = match self.schedule(from_station, to_station) {
            Ok(table) => InfoPanel::Table { table },
            Err(err) => InfoPanel::message(err.to_string()),
        };

        TrainsPanel { map, info }
    }
}
