//! Common test infrastructure
//!
//! This module provides the infrastructure for end-to-end tests: a mock
//! EventCatalog HTTP server and an MCP test client that drives the message
//! handler directly. Tests should only import from this module, not from
//! internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{McpTestClient, MockCatalog};
//!
//! #[tokio::test]
//! async fn test_find_resources() {
//!     let catalog = MockCatalog::spawn_default().await;
//!     let mut client = McpTestClient::connect(catalog.base_url.clone()).await;
//!
//!     let result = client.call_tool("find_resources", serde_json::json!({})).await;
//!     assert!(result["content"][0]["text"].is_string());
//! }
//! ```

mod client;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::McpTestClient;
pub use fixtures::{default_documents, DEFAULT_MANIFEST, SERVICES_INDEX};
pub use server::MockCatalog;
