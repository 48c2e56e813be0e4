//! Document store domain.
//!
//! The MCP tools never talk HTTP themselves; they go through the
//! [`DocumentStore`] trait. [`NotionClient`] is the production implementation,
//! backed by the Notion REST API.

mod client;
mod error;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde_json::Value;

pub use client::{NotionClient, SEARCH_PAGE_SIZE};
pub use error::{StoreError, StoreResult};

/// Authenticated access to the remote document store.
///
/// Results are passed through as raw JSON; no schema is imposed on the
/// documents the store returns.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Search pages matching `query`, most relevant first.
    ///
    /// At most [`SEARCH_PAGE_SIZE`] results are returned; later pages are never requested.
    async fn search(&self, query: &str) -> StoreResult<Vec<Value>>;

    /// Fetch a single page by its identifier.
    async fn retrieve(&self, page_id: &str) -> StoreResult<Value>;
}
