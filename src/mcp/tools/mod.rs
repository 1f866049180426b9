//! MCP Tools
//!
//! Tool implementations for catalog listing, resource detail, owner and
//! schema lookups.

pub mod catalog;
pub mod guides;
pub mod owners;
pub mod schemas;

use super::registry::McpRegistry;

/// Register all tools with the registry
pub fn register_all_tools(registry: &mut McpRegistry) {
    catalog::register_tools(registry);
    owners::register_tools(registry);
    schemas::register_tools(registry);
    guides::register_tools(registry);
}
