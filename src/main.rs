// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_source::HttpSensorSource;
use crate::infrastructure::regions::RegionBoard;
use crate::presentation::app_state::AppState;
use crate::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let dashboard = config.dashboard.layout();

    // Data source (infrastructure layer)
    let source = Arc::new(HttpSensorSource::new(
        config.source.base_url.clone(),
        config.source.timeout(),
        config.source.filter(),
    )?);

    // Display regions, one per configured series
    let board = RegionBoard::with_regions(dashboard.region_ids());

    // Orchestrator (application layer), started exactly once
    let service = DashboardService::new(
        source,
        Arc::new(board.clone()),
        dashboard.series.clone(),
        config.dashboard.mode,
    );
    tokio::spawn(async move {
        match service.start().await {
            Ok(report) => {
                let failed = report.failures().count();
                if failed > 0 {
                    tracing::warn!("{} region(s) left empty", failed);
                }
            }
            Err(e) => tracing::warn!("Dashboard start skipped: {}", e),
        }
    });

    let state = Arc::new(AppState { dashboard, board });

    // Build router (presentation layer)
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind))?;
    tracing::info!(
        "Starting sensor-dashboard on {} (upstream {})",
        addr,
        config.source.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
