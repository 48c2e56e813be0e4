//! Tools domain module.
//!
//! Tools are the operations MCP clients can discover and call. Each one
//! forwards to the document store.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The closed set of tools, the catalog, and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, `execute()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolKind` variant and its arms in `registry.rs`

pub mod definitions;
mod error;
mod registry;

pub use error::ToolError;
pub use registry::{ToolKind, ToolRegistry};
