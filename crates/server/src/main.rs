mod routes;
mod server;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use rail_atlas_core::Dashboard;
use rail_atlas_core::transit::{DirectorySource, RailDataset, StaticRailProvider};
use tracing_subscriber::EnvFilter;

use crate::server::DashboardServer;

#[derive(Parser, Debug)]
#[command(name = "rail-atlas-server")]
#[command(about = "Serve the Indian railway station and train route dashboard")]
struct Args {
    /// Directory holding the station, state-boundary and train datasets
    #[arg(short, long, env = "RAIL_ATLAS_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Address to listen on
    #[arg(short, long, env = "RAIL_ATLAS_BIND", default_value = "127.0.0.1:8050")]
    bind: SocketAddr,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    tracing::info!(data_dir = %args.data_dir.display(), "loading datasets");
    let provider = StaticRailProvider::load(&DirectorySource::new(&args.data_dir));
    if provider.stations().is_empty() && provider.routes().is_empty() {
        tracing::warn!("no stations or routes loaded, every panel will be empty");
    }

    let dashboard = Dashboard::new(Arc::new(provider));
    let server = DashboardServer::start(args.bind, routes::create_router(dashboard))
        .await
        .wrap_err_with(|| format!("failed to bind {}", args.bind))?;

    tracing::info!(addr = %server.local_addr(), "dashboard listening");

    tokio::signal::ctrl_c()
        .await
        .wrap_err("failed to listen for ctrl-c")?;

    tracing::info!("shutting down");
    server.shutdown().await.wrap_err("server exited with an error")?;

    Ok(())
}
