use serde::Serialize;

use crate::map::MapFigure;
use crate::plot::ScheduleTable;

pub const FROM_AND_TO_REQUIRED: &str = "From and To are required.";
/// Shown in the info panel for any incomplete selection
pub const INFO_NEEDS_FROM: &str = "The information cannot be displayed if `from` is empty.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StationsPanel {
    pub title: String,
    pub figure: MapFigure,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapPanel {
    Figure { caption: String, figure: MapFigure },
    Message { text: String },
}

impl MapPanel {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InfoPanel {
    Table { table: ScheduleTable },
    Message { text: String },
}

impl InfoPanel {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message { text: text.into() }
    }
}

/// Everything the trains tab shows for one selection
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrainsPanel {
    pub map: MapPanel,
    pub info: InfoPanel,
}
