//! The Freezer Door MCP server
//!
//! Serves the calculator tools over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use freezer_door::build_info;
use freezer_door::catalog::{CatalogStore, JsonCatalogSource};
use freezer_door::config::Config;
use freezer_door::mcp::FreezerDoorService;
use freezer_door::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so everything else goes to stderr
    telemetry::init_logging()?;
    build_info::print_startup_banner("MCP stdio");

    let config = Config::from_env()?;
    eprintln!("Data directory: {}", config.data_dir.display());

    let catalog = CatalogStore::open(JsonCatalogSource::new(&config.data_dir))?;
    let service = FreezerDoorService::new(catalog);

    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
