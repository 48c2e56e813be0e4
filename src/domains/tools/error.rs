//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::store::StoreError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The document store call failed; passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Convert into the protocol-level error returned to the client.
    pub fn to_mcp_error(&self) -> McpError {
        match self {
            Self::UnknownTool(_) | Self::InvalidArguments(_) => {
                McpError::invalid_params(self.to_string(), None)
            }
            Self::Store(StoreError::NotFound(_)) => {
                McpError::resource_not_found(self.to_string(), None)
            }
            Self::Store(_) | Self::Internal(_) => McpError::internal_error(self.to_string(), None),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        err.to_mcp_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_unknown_tool_maps_to_invalid_params() {
        let err = ToolError::unknown_tool("nonexistent_tool").to_mcp_error();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("nonexistent_tool"));
    }

    #[test]
    fn test_not_found_maps_to_resource_not_found() {
        let err = ToolError::from(StoreError::NotFound("abc123".into())).to_mcp_error();
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("abc123"));
    }

    #[test]
    fn test_unauthorized_maps_to_internal_error() {
        let err = ToolError::from(StoreError::Unauthorized).to_mcp_error();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("Unauthorized"));
    }
}
