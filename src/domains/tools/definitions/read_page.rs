//! Page read tool.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};

use super::common::{parse_arguments, require_non_empty};
use crate::domains::store::DocumentStore;
use crate::domains::tools::ToolError;

/// Parameters for the page read tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadPageParams {
    /// Notion page identifier, with or without dashes.
    #[serde(rename = "pageId")]
    #[schemars(description = "ID of the Notion page to read")]
    pub page_id: String,
}

/// Read page tool definition.
#[derive(Debug, Clone)]
pub struct ReadPageTool;

impl ReadPageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_page";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Read a single Notion page by ID. Returns the page object with its properties.";

    /// Parse and validate raw call arguments.
    pub fn parse_params(arguments: JsonObject) -> Result<ReadPageParams, ToolError> {
        let params: ReadPageParams = parse_arguments(Self::NAME, arguments)?;
        require_non_empty(Self::NAME, "pageId", &params.page_id)?;
        Ok(params)
    }

    #[instrument(skip_all, fields(page_id = %params.page_id))]
    pub async fn execute(
        params: &ReadPageParams,
        store: &dyn DocumentStore,
    ) -> Result<Value, ToolError> {
        info!("Reading page: {}", params.page_id);
        Ok(store.retrieve(&params.page_id).await?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadPageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
