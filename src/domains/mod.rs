//! Domains module containing business logic organized by bounded contexts.
//!
//! - **store**: authenticated access to the remote document store
//! - **tools**: the MCP tools built on top of it

pub mod store;
pub mod tools;
