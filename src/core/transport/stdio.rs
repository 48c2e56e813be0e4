//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::{McpServer, status};

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport.
    ///
    /// The liveness endpoint gets its own listener first; a bind failure
    /// aborts before any MCP traffic is read.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        let config = server.config().clone();
        let status_task = status::spawn(&config.server.name, &config.status).await?;

        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Handshake(e.to_string()))?;

        let outcome = service
            .waiting()
            .await
            .map_err(TransportError::serve);

        status_task.abort();
        outcome?;

        info!("STDIO transport finished");
        Ok(())
    }
}
