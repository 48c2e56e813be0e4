//! Crate-wide error type.
//!
//! Each domain keeps its own error enum. This one covers what can go wrong
//! while building the server: bad configuration or an unusable store client.

use thiserror::Error;

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Any error raised while setting the server up.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Store error: {0}")]
    Store(#[from] crate::domains::store::StoreError),

    /// Missing or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
