//! Logging setup
//!
//! Everything goes to stderr; stdout carries the MCP transport.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, honouring `RUST_LOG` on top of `freezer_door=info`
pub fn init_logging() -> Result<(), ParseError> {
    let filter = EnvFilter::from_default_env().add_directive("freezer_door=info".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
