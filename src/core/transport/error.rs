//! Errors raised while bringing up or running a listener.

use thiserror::Error;

/// Result alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failure of a transport or of the liveness listener.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listen address could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Socket-level failure after binding.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The MCP handshake with the client did not complete.
    #[error("MCP session failed to start: {0}")]
    Handshake(String),

    /// The listener or session stopped with an error.
    #[error("Transport stopped: {0}")]
    Serve(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    pub fn serve(err: impl std::fmt::Display) -> Self {
        Self::Serve(err.to_string())
    }
}
