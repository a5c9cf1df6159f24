// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use flood_dashboard::application::dashboard_service::DashboardService;
use flood_dashboard::infrastructure::backend_client::HttpTelemetrySource;
use flood_dashboard::infrastructure::config::load_config;
use flood_dashboard::presentation::app_state::AppState;
use flood_dashboard::presentation::routes::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_config()?;

    // Create telemetry source (infrastructure layer)
    let source = Arc::new(HttpTelemetrySource::new(&config.backend)?);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(source, config.dashboard.features());

    let state = Arc::new(AppState {
        dashboard_service,
        title: config.dashboard.title.clone(),
    });

    // Build router (presentation layer)
    let app = router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address: {}", config.server.bind))?;
    tracing::info!(
        %addr,
        backend = %config.backend.base_url,
        "Starting flood-dashboard"
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
