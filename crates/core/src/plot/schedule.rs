//! Schedule table for a single departure/arrival pair.

use chrono::NaiveTime;
use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::plot::{PlotError, routes::resolve_routes, selection::Selection};
use crate::transit::{RouteSegment, Schedule};

/// Table columns, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum ScheduleColumn {
    #[strum(serialize = "Arrival")]
    Arrival,
    #[strum(serialize = "Departure")]
    Departure,
    #[strum(serialize = "1st Class")]
    FirstClass,
    #[strum(serialize = "Time (m)")]
    Duration,
    #[strum(serialize = "Sleeper")]
    Sleeper,
    #[strum(serialize = "Dist (KM)")]
    Distance,
}

impl ScheduleColumn {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellValue {
    Time(NaiveTime),
    Number(f64),
    Empty,
}

impl From<Option<NaiveTime>> for CellValue {
    fn from(value: Option<NaiveTime>) -> Self {
        value.map_or(Self::Empty, Self::Time)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Time(time) => serializer.collect_str(&time.format("%H:%M:%S")),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Empty => serializer.serialize_none(),
        }
    }
}

/// One table row: the schedule of one route, keyed by column label
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleRow {
    schedule: Schedule,
}

impl ScheduleRow {
    pub fn get(&self, column: ScheduleColumn) -> CellValue {
        let s = &self.schedule;
        match column {
            ScheduleColumn::Arrival => s.arrival.into(),
            ScheduleColumn::Departure => s.departure.into(),
            ScheduleColumn::FirstClass => s.first_class_fare.into(),
            ScheduleColumn::Duration => s.duration_minutes.into(),
            ScheduleColumn::Sleeper => s.sleeper_fare.into(),
            ScheduleColumn::Distance => s.distance_km.into(),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (&'static str, CellValue)> + '_ {
        ScheduleColumn::iter().map(|column| (column.label(), self.get(column)))
    }
}

impl Serialize for ScheduleRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut row = serializer.serialize_map(Some(ScheduleColumn::iter().len()))?;
        for (label, value) in self.cells() {
            row.serialize_entry(label, &value)?;
        }
        row.end()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub id: &'static str,
}

/// Column specs plus row data, the shape a web data-table consumes
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduleTable {
    pub columns: Vec<ColumnSpec>,
    pub data: Vec<ScheduleRow>,
}

impl ScheduleTable {
    fn new(rows: Vec<ScheduleRow>) -> Self {
        Self {
            columns: ScheduleColumn::iter()
                .map(|c| ColumnSpec {
                    name: c.label(),
                    id: c.label(),
                })
                .collect(),
            data: rows,
        }
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.data
    }
}

/// Schedule rows for every route from `from_station` to `to_station`, in
/// dataset order.
///
/// A table only makes sense for one destination, so `All` is rejected.
pub fn build_schedule_table(
    from_station: &str,
    to_station: &str,
    routes: &[RouteSegment],
) -> Result<ScheduleTable, PlotError> {
    if Selection::from(to_station).is_all() {
        return Err(PlotError::AmbiguousSelection);
    }

    let rows = resolve_routes(routes, from_station, to_station)
        .into_iter()
        .map(|route| ScheduleRow {
            schedule: route.schedule.clone(),
        })
        .collect();

    Ok(ScheduleTable::new(rows))
}
