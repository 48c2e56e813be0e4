//! Document store error types.

use thiserror::Error;

/// Result type for document store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by the document store client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The credential was rejected by the store.
    #[error("Unauthorized: the Notion API key is missing, invalid or expired")]
    Unauthorized,

    /// No document exists for the requested identifier.
    #[error("Page not found: {0}")]
    NotFound(String),

    /// The request never produced an HTTP response.
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The store answered with a non-success status not covered above.
    #[error("Notion API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body did not have the expected shape.
    #[error("Unexpected response from Notion: {0}")]
    Decode(String),

    /// The client could not be built from its configuration.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an error from an upstream error status and body.
    ///
    /// `resource` names what was requested, so a 404 can report it.
    pub fn from_response(status: u16, body: &str, resource: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            404 => Self::NotFound(resource.to_string()),
            _ => match serde_json::from_str::<ApiErrorBody>(body) {
                Ok(parsed) => Self::Api {
                    status,
                    code: parsed.code,
                    message: parsed.message,
                },
                Err(_) => Self::Api {
                    status,
                    code: "unknown".to_string(),
                    message: body.to_string(),
                },
            },
        }
    }
}

/// Error object returned by the Notion API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}
