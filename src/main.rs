//! The Freezer Door
//!
//! HTTP server for the batch cocktail dilution calculator.

use freezer_door::api::{self, AppState};
use freezer_door::build_info;
use freezer_door::catalog::{CatalogStore, JsonCatalogSource};
use freezer_door::config::Config;
use freezer_door::telemetry;

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_logging()?;
    build_info::print_startup_banner("HTTP");

    let config = Config::from_env()?;
    eprintln!("Data directory: {}", config.data_dir.display());

    let catalog = CatalogStore::open(JsonCatalogSource::new(&config.data_dir))?;
    let app = api::router(AppState::new(catalog), config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
