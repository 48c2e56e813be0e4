//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the MCP front-end, the liveness endpoint
//! and the transports that carry protocol traffic.

pub mod config;
pub mod error;
pub mod server;
pub mod status;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::TransportConfig;
