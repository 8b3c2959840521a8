use anyhow::{bail, Context, Result};
use clap::Parser;
use rail_atlas_transit::loader::{decode_routes, parse_routes, shp};
use rail_atlas_transit::{RouteSegment, StationIndex};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "station-index",
    author,
    version,
    about = "Derive the station selector index from the train route dataset",
    long_about = "Reads the train route layer (a GeoJSON file, a .shp file or a shapefile \
                  directory, one line feature per route) and writes the sorted, \
                  de-duplicated departure and arrival station names the dashboard offers \
                  in its From/To selectors."
)]
struct Args {
    /// Train route layer: GeoJSON file, .shp file or shapefile directory
    #[arg(short, long)]
    trains: PathBuf,

    /// Output JSON file
    #[arg(short, long)]
    output: PathBuf,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    log::info!("Input: {}", args.trains.display());
    log::info!("Output: {}", args.output.display());

    if !args.trains.exists() {
        bail!("Input file does not exist: {}", args.trains.display());
    }

    let routes = read_routes(&args.trains)?;
    let index = build_index(routes)?;
    log::info!(
        "  {} departure stations, {} arrival stations",
        index.from_stations.len(),
        index.to_stations.len()
    );

    let json = render_index(&index)?;
    std::fs::write(&args.output, json)
        .with_context(|| format!("Failed to write index to {}", args.output.display()))?;

    log::info!("Done.");
    Ok(())
}

fn read_routes(path: &Path) -> Result<Vec<RouteSegment>> {
    if shp::shp_path(path).is_some() {
        log::info!("Reading shapefile layer");
        let features = shp::read_features(path).context("Failed to read shapefile layer")?;
        return Ok(decode_routes(features));
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_routes(&content).context("Failed to parse train routes")
}

fn build_index(routes: Vec<RouteSegment>) -> Result<StationIndex> {
    log::debug!("Parsed {} routes", routes.len());

    if routes.is_empty() {
        bail!("No usable routes found");
    }

    Ok(StationIndex::from_routes(&routes))
}

fn render_index(index: &StationIndex) -> Result<String> {
    serde_json::to_string_pretty(index).context("Failed to serialize station index")
}
