//! Helpers shared by the tool definitions.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;

use crate::domains::tools::ToolError;

/// Deserialize raw call arguments into a tool's parameter struct.
///
/// Missing or mistyped fields become [`ToolError::InvalidArguments`] naming the tool.
pub fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: JsonObject,
) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", tool, e)))
}

/// Reject a required string argument that is empty or only whitespace.
pub fn require_non_empty(tool: &str, field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::invalid_arguments(format!(
            "{}: '{}' must not be empty",
            tool, field
        )));
    }
    Ok(())
}
