//! Catalog Listing Resources
//!
//! Static `eventcatalog://` URIs exposing the kind-filtered catalog index
//! as JSON documents.

use serde_json::json;

use crate::catalog::{KindFilter, ResourceKind};
use crate::mcp::context::ToolContext;
use crate::mcp::protocol::{McpError, ResourceContent};
use crate::mcp::registry::{McpRegistry, ResourceBuilder, ResourceResult};

/// The static listings exposed as MCP resources.
const LISTINGS: [(&str, &str, &str, KindFilter); 9] = [
    (
        "eventcatalog://all",
        "All Resources in EventCatalog",
        "All messages, domains and services in EventCatalog",
        KindFilter::All,
    ),
    (
        "eventcatalog://events",
        "All Events in EventCatalog",
        "All events in EventCatalog",
        KindFilter::Kind(ResourceKind::Event),
    ),
    (
        "eventcatalog://commands",
        "All Commands in EventCatalog",
        "All commands in EventCatalog",
        KindFilter::Kind(ResourceKind::Command),
    ),
    (
        "eventcatalog://queries",
        "All Queries in EventCatalog",
        "All queries in EventCatalog",
        KindFilter::Kind(ResourceKind::Query),
    ),
    (
        "eventcatalog://services",
        "All Services in EventCatalog",
        "All services in EventCatalog",
        KindFilter::Kind(ResourceKind::Service),
    ),
    (
        "eventcatalog://domains",
        "All Domains in EventCatalog",
        "All domains in EventCatalog",
        KindFilter::Kind(ResourceKind::Domain),
    ),
    (
        "eventcatalog://flows",
        "All Flows in EventCatalog",
        "All flows in EventCatalog",
        KindFilter::Kind(ResourceKind::Flow),
    ),
    (
        "eventcatalog://teams",
        "All Teams in EventCatalog",
        "All teams in EventCatalog",
        KindFilter::Kind(ResourceKind::Team),
    ),
    (
        "eventcatalog://users",
        "All Users in EventCatalog",
        "All users in EventCatalog",
        KindFilter::Kind(ResourceKind::User),
    ),
];

/// Register catalog listing resources with the registry
pub fn register_resources(registry: &mut McpRegistry) {
    for (uri, name, description, kind) in LISTINGS {
        registry.register_resource(
            ResourceBuilder::new(uri, name)
                .description(description)
                .mime_type("application/json")
                .build(move |ctx, uri| read_listing(ctx, uri, kind)),
        );
    }
}

/// Read one listing: the full kind-filtered index, unpaginated.
async fn read_listing(ctx: ToolContext, uri: String, kind: KindFilter) -> ResourceResult {
    let records = ctx.catalog.snapshot().await?;

    let filtered: Vec<_> = records
        .into_iter()
        .filter(|record| kind.matches(record.kind))
        .collect();

    let text = serde_json::to_string_pretty(&json!({ "resources": filtered }))
        .map_err(|e| McpError::InternalError(e.to_string()))?;

    Ok(vec![ResourceContent {
        uri,
        mime_type: Some("application/json".to_string()),
        text,
    }])
}
