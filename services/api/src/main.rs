use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use content::{InMemoryContentRepository, profile::Profile};
use portfolio_api::{AppState, config::Settings, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Initialize logging
    telemetry::init_tracing(&settings.log.level)?;

    info!("Starting portfolio service");

    // Content lives in memory for the lifetime of the process
    let repository = InMemoryContentRepository::new();
    let app_state = AppState::new(Arc::new(repository), Profile::portfolio());

    let app = portfolio_api::app(app_state, &settings);

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Portfolio service listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Portfolio service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
