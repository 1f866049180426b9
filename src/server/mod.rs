//! Transports
//!
//! Thin I/O plumbing that moves MCP message text between a client and the
//! handler. All protocol behavior lives in `crate::mcp`.

pub mod http;
pub mod stdio;

pub use http::run_http_server;
pub use stdio::run_stdio_server;
