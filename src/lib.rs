//! EventCatalog MCP Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalog;
pub mod config;
pub mod mcp;
pub mod query;
pub mod server;

// Re-export commonly used types for convenience
pub use catalog::{CatalogClient, KindFilter, ResourceKind, ResourceRecord};
pub use config::{AppConfig, Transport};
pub use mcp::McpServer;
pub use query::{run_query, PageResult, QueryParams};
