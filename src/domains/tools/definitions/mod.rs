//! Tool definitions module.
//!
//! Each tool is defined in its own file: parameters, validation, execution
//! against the document store, and its MCP metadata.

pub mod common;
pub mod read_page;
pub mod search_pages;

pub use read_page::{ReadPageParams, ReadPageTool};
pub use search_pages::{SearchPagesParams, SearchPagesTool};
