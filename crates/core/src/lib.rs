pub mod dashboard;
pub mod map;
pub mod plot;

#[cfg(test)]
pub(crate) mod test_fixtures;

// Re-export transit from the transit crate
pub use rail_atlas_transit as transit;

pub use dashboard::Dashboard;
pub use plot::PlotError;
