//! Notion MCP Server Library
//!
//! Exposes Notion page search and page reads as Model Context Protocol (MCP)
//! tools, plus a small HTTP liveness endpoint.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler, the
//!   `/api/status` endpoint and the transports
//! - **domains**: business logic
//!   - **store**: the `DocumentStore` trait and its Notion implementation
//!   - **tools**: the tool catalog and dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use notion_mcp_server::core::{Config, McpServer, transport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone())?;
//!     transport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
