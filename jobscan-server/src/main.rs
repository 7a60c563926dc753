//! jobscan-server - HTTP API for job posting scam checks
//!
//! Usage: `jobscan-server [config.toml]` (or set `JOBSCAN_CONFIG`)

mod routes;

use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use jobscan_rs::config::AppConfig;
use jobscan_rs::engine::Assessor;
use jobscan_rs::logging;
use jobscan_rs::storage::Stores;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::resolve(config_path.as_deref()).context("Failed to load configuration")?;

    logging::init(&config.logging)?;

    info!("Starting jobscan-server v{}", env!("CARGO_PKG_VERSION"));
    info!("  Data directory: {}", config.storage.data_dir.display());
    info!("  Verification deadline: {:?}", config.probe.deadline());

    let state = Arc::new(AppState {
        assessor: Assessor::from_config(&config)?,
        stores: Stores::from_config(&config.storage),
    });

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_addr))?;
    info!("Listening on http://{}", config.server.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
