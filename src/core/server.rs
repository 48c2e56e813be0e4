//! MCP Server implementation.
//!
//! `McpServer` is the protocol front-end: it answers `tools/list` from the
//! registry's catalog and routes `tools/call` to the registry, logging any
//! failure with the tool name before handing the error back to the transport.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    model::*,
    service::RequestContext,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::store::{DocumentStore, NotionClient};
use crate::domains::tools::{ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "Search and read Notion pages. Use search_pages to find pages by text, then read_page with a page ID from the results.";

/// The main MCP server handler.
///
/// Cheap to clone; all state is shared and immutable after construction.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool catalog and dispatcher.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Create a server talking to the Notion API described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let store = NotionClient::new(&config.notion)?;
        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create a server on top of any document store.
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let registry = Arc::new(ToolRegistry::new(store, &config.tools));
        Self {
            config: Arc::new(config),
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// The full tool catalog, in declaration order.
    pub fn tool_catalog(&self) -> Vec<Tool> {
        self.registry.list_tools()
    }

    /// Invoke a tool and return its raw result.
    ///
    /// Failures are logged with the tool name and returned unchanged.
    #[instrument(skip(self, arguments))]
    pub async fn invoke_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<Value, ToolError> {
        info!("Calling tool: {}", name);
        match self.registry.invoke(name, arguments.unwrap_or_default()).await {
            Ok(value) => Ok(value),
            Err(e) => {
                error!(tool = %name, error = %e, "Tool call failed");
                Err(e)
            }
        }
    }

    /// Invoke a tool and wrap the result as MCP content.
    ///
    /// The raw result is serialized as pretty-printed JSON into a single text block.
    pub async fn call_tool_result(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let value = self.invoke_tool(name, arguments).await?;
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_catalog(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call_tool_result(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::domains::store::StoreError;
    use crate::domains::store::fake::FakeStore;
    use serde_json::json;

    fn server_with(store: FakeStore) -> McpServer {
        McpServer::with_store(Config::default(), Arc::new(store))
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_new_requires_credential() {
        let err = McpServer::new(Config::default()).err().unwrap();
        assert!(matches!(err, Error::Store(StoreError::Config(_))));
    }

    #[test]
    fn test_get_info_enables_tools() {
        let info = server_with(FakeStore::default()).get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
    }

    #[test]
    fn test_tool_catalog() {
        let names: Vec<_> = server_with(FakeStore::default())
            .tool_catalog()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(names, vec!["search_pages", "read_page"]);
    }

    #[tokio::test]
    async fn test_call_tool_result_serializes_raw_value() {
        let page = json!({ "object": "page", "id": "abc123" });
        let server = server_with(FakeStore::with_page("abc123", page.clone()));

        let mut args = JsonObject::new();
        args.insert("pageId".into(), json!("abc123"));
        let result = server.call_tool_result("read_page", Some(args)).await.unwrap();

        assert_eq!(result.is_error, Some(false));
        let parsed: Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(parsed, page);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_protocol_error() {
        let server = server_with(FakeStore::default());
        let err = server
            .call_tool_result("nonexistent_tool", None)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_missing_arguments_rejected() {
        let server = server_with(FakeStore::default());
        let err = server.invoke_tool("search_pages", None).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_store_error_reraised_unchanged() {
        let server = server_with(FakeStore::unauthorized());
        let mut args = JsonObject::new();
        args.insert("query".into(), json!("roadmap"));

        let err = server.invoke_tool("search_pages", Some(args)).await.unwrap_err();
        assert!(matches!(err, ToolError::Store(StoreError::Unauthorized)));
    }
}
