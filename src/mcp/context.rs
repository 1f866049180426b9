//! MCP Tool Execution Context
//!
//! Provides access to shared server state for tool implementations.

use std::sync::Arc;

use crate::catalog::CatalogClient;

/// Context provided to tool and resource handlers during execution
#[derive(Clone)]
pub struct ToolContext {
    /// Access to the external catalog (manifest cache, documents, schemas)
    pub catalog: Arc<CatalogClient>,

    /// Number of records per page for listing tools
    pub page_size: usize,

    /// Server version info
    pub server_version: String,
}

impl ToolContext {
    /// Base URL of the catalog this server fronts
    pub fn catalog_url(&self) -> &str {
        self.catalog.base_url()
    }
}
