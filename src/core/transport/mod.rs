//! Transport layer for the MCP server.
//!
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **HTTP**: JSON-RPC over POST requests - feature: `http`
//!
//! Whichever transport runs, the `/api/status` liveness endpoint is served:
//! on its own listener alongside STDIO, or on the HTTP transport's router.

mod config;
mod error;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};

#[cfg(feature = "http")]
pub use config::HttpConfig;

use tracing::info;

use crate::core::McpServer;

/// Serve `server` over the transport selected in its configuration.
///
/// Returns when the client disconnects (STDIO) or the listener fails.
pub async fn run(server: McpServer) -> TransportResult<()> {
    let transport = server.config().transport.clone();
    info!("Starting transport: {}", transport.description());

    match transport {
        #[cfg(feature = "stdio")]
        TransportConfig::Stdio => stdio::StdioTransport::run(server).await,
        #[cfg(feature = "http")]
        TransportConfig::Http(cfg) => http::HttpTransport::new(cfg).run(server).await,
    }
}
