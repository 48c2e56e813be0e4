//! Tool Registry - central catalog and dispatch for all tools.
//!
//! The set of tools is closed: [`ToolKind`] enumerates them, and every match
//! over it pairs a name with its descriptor and handler at compile time. The
//! only runtime lookup left is resolving a client-supplied name.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tokio::sync::{Semaphore, SemaphorePermit};
use tracing::{debug, info, warn};

use super::ToolError;
use super::definitions::{ReadPageTool, SearchPagesTool};
use crate::core::config::ToolsConfig;
use crate::domains::store::DocumentStore;

/// Every tool the server exposes, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    SearchPages,
    ReadPage,
}

impl ToolKind {
    /// All tools, in the order they are listed to clients.
    pub const ALL: [ToolKind; 2] = [ToolKind::SearchPages, ToolKind::ReadPage];

    /// The registered MCP name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SearchPages => SearchPagesTool::NAME,
            Self::ReadPage => ReadPageTool::NAME,
        }
    }

    /// Resolve a client-supplied tool name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Tool metadata advertised in `tools/list`.
    pub fn descriptor(self) -> Tool {
        match self {
            Self::SearchPages => SearchPagesTool::to_tool(),
            Self::ReadPage => ReadPageTool::to_tool(),
        }
    }
}

/// Tool registry - owns the catalog and dispatches calls.
///
/// Built once at startup and read-only afterwards, so it can be shared across
/// concurrent requests without locking.
pub struct ToolRegistry {
    store: Arc<dyn DocumentStore>,
    catalog: Vec<Tool>,
    permits: Semaphore,
}

impl ToolRegistry {
    /// Create a registry dispatching to `store`.
    pub fn new(store: Arc<dyn DocumentStore>, config: &ToolsConfig) -> Self {
        Self {
            store,
            catalog: ToolKind::ALL.into_iter().map(ToolKind::descriptor).collect(),
            permits: Semaphore::new(config.max_concurrent_calls.max(1)),
        }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.into_iter().map(ToolKind::name).collect()
    }

    /// Get the full tool catalog.
    pub fn list_tools(&self) -> Vec<Tool> {
        info!("Listing {} tools", self.catalog.len());
        self.catalog.clone()
    }

    /// Number of calls that may still start without waiting.
    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }

    /// Dispatch a tool call by name.
    ///
    /// Arguments are validated before a concurrency permit is taken, so bad
    /// calls never wait behind in-flight ones. Store errors are returned as-is.
    pub async fn invoke(&self, name: &str, arguments: JsonObject) -> Result<Value, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        match kind {
            ToolKind::SearchPages => {
                let params = SearchPagesTool::parse_params(arguments)?;
                let _permit = self.acquire(kind).await?;
                SearchPagesTool::execute(&params, self.store.as_ref()).await
            }
            ToolKind::ReadPage => {
                let params = ReadPageTool::parse_params(arguments)?;
                let _permit = self.acquire(kind).await?;
                ReadPageTool::execute(&params, self.store.as_ref()).await
            }
        }
    }

    async fn acquire(&self, kind: ToolKind) -> Result<SemaphorePermit<'_>, ToolError> {
        if self.permits.available_permits() == 0 {
            debug!("Tool {} waiting for a free call slot", kind.name());
        }
        self.permits
            .acquire()
            .await
            .map_err(|_| ToolError::internal("tool dispatcher is closed"))
    }
}
