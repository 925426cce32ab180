use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_router::config::AppConfig;
use transit_router::fares::{RideHailEstimator, load_profiles};
use transit_router::graph::GraphSnapshot;
use transit_router::journey::JourneyPlanner;
use transit_router::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let graph = GraphSnapshot::load(&config.graph_path).await?;

    let profiles = match &config.fares_path {
        Some(path) => load_profiles(path).await?,
        None => {
            info!("TRANSIT_FARES_PATH not set, using the default ride-hail profile");
            Vec::new()
        }
    };

    let planner = JourneyPlanner::new(
        Arc::new(graph),
        Arc::new(RideHailEstimator::new(profiles)),
        config.planner.clone(),
    );
    let app = create_router(AppState::new(planner));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "transit router listening");
    info!("  GET  /health       - Health check");
    info!("  GET  /graph/stats  - Loaded graph counts");
    info!("  POST /route        - Plan a route");
    info!("  POST /route/direct - Plan a direct route");

    axum::serve(listener, app).await?;
    Ok(())
}
