//! MCP Resources
//!
//! Read-only data access: static kind listings over the catalog index.

pub mod listings;

use super::registry::McpRegistry;

/// Register all resources with the registry
pub fn register_all_resources(registry: &mut McpRegistry) {
    listings::register_resources(registry);
}
