//! Binary entry point: read configuration, set up logging, serve.

use anyhow::Result;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use notion_mcp_server::core::{Config, McpServer, transport};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Refuse to start without a credential rather than failing every call.
    config.validate()?;

    let server = McpServer::new(config)?;
    transport::run(server).await?;

    info!("Server shutting down");
    Ok(())
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` directives are honoured on top of the configured level. Output
/// goes to stderr because stdout carries STDIO transport frames.
fn init_logging(level: &str) {
    let parsed = level.parse::<Level>().ok();

    fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(parsed.unwrap_or(Level::INFO).into()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if parsed.is_none() {
        warn!("Unknown log level {:?}, using info", level);
    }
}
