//! Page search tool.
//!
//! Runs a full-text search over the pages shared with the integration and
//! returns the first page of matches as Notion reports them.

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

/// Parameters for the page search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchPagesParams {
    /// Text to search for.
    #[schemars(description = "Text to search for in page titles and content")]
    pub query: String,
}

/// Search pages tool definition.
#[derive(Debug, Clone)]
pub struct SearchPagesTool;

impl SearchPagesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_pages";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search Notion pages by text. Returns up to 10 of the most relevant pages, in the order Notion ranks them.";

    /// Parse and validate raw call arguments.
    pub fn parse_params(arguments: JsonObject) -> Result<SearchPagesParams, ToolError> {
        let params: SearchPagesParams = parse_arguments(Self::NAME, arguments)?;
        require_non_empty(Self::NAME, "query", &params.query)?;
        Ok(params)
    }

    /// Execute the search against the store.
    #[instrument(skip_all, fields(query = %params.query))]
    pub async fn execute(
        params: &SearchPagesParams,
        store: &dyn DocumentStore,
    ) -> Result<Value, ToolError> {
        info!("Searching pages for: {}", params.query);
        let results = store.search(&params.query).await?;
        info!("Search returned {} page(s)", results.len());
        Ok(Value::Array(results))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchPagesParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::store::fake::FakeStore;
    use serde_json::json;

    #[test]
    fn test_schema_requires_query() {
        let tool = SearchPagesTool::to_tool();
        let required = tool.input_schema.get("required").unwrap();
        assert_eq!(required, &json!(["query"]));
        assert!(tool.input_schema["properties"].get("query").is_some());
    }

    #[test]
    fn test_parse_params_rejects_blank_query() {
        let mut args = JsonObject::new();
        args.insert("query".into(), json!("  "));
        assert!(matches!(
            SearchPagesTool::parse_params(args),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_wraps_results_in_array() {
        let store = FakeStore::with_search_results(vec![json!({ "id": "p1" })]);
        let params = SearchPagesParams {
            query: "roadmap".into(),
        };
        let result = SearchPagesTool::execute(&params, &store).await.unwrap();
        assert_eq!(result, json!([{ "id": "p1" }]));
        assert_eq!(store.calls(), vec!["search:roadmap"]);
    }
}
