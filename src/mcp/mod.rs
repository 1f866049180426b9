//! MCP (Model Context Protocol) Server
//!
//! Exposes the catalog index to LLM clients as MCP tools and resources.
//! The protocol is JSON-RPC 2.0; transports only move message text.
//!
//! ## Architecture
//!
//! - Protocol: message envelope and error codes
//! - Registry: named tools and resources with async handlers
//! - Handler: transport-agnostic method dispatch
//! - Tools/resources: catalog listing, detail, owner and schema lookups

pub mod context;
pub mod handler;
pub mod protocol;
pub mod registry;
pub mod resources;
pub mod tools;

pub use handler::McpServer;
pub use protocol::{McpError, McpRequest, McpResponse};
pub use registry::McpRegistry;
