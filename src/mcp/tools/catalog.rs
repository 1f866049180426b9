//! Catalog Tools
//!
//! Tools for listing catalog resources and reading a single resource body.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{KindFilter, ResourceKind};
use crate::mcp::context::ToolContext;
use crate::mcp::protocol::{McpError, ToolsCallResult};
use crate::mcp::registry::{McpRegistry, RegisteredTool, ToolBuilder, ToolResult};
use crate::query::{run_query, QueryParams};

/// Register catalog tools with the registry
pub fn register_tools(registry: &mut McpRegistry) {
    registry.register_tool(find_resources_tool());
    registry.register_tool(find_resource_tool());
}

// ============================================================================
// find_resources
// ============================================================================

#[derive(Debug, Deserialize)]
struct FindResourcesParams {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    cursor: Option<String>,
}

fn find_resources_tool() -> RegisteredTool {
    ToolBuilder::new("find_resources")
        .description(
            "Find resources available in EventCatalog: events, commands, queries, \
             services, domains, flows, entities, channels, teams, users and custom \
             docs. Supports filtering by type, case-insensitive search over id, \
             name and summary, and cursor pagination.",
        )
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ["events", "commands", "queries", "services", "domains",
                             "flows", "entities", "channels", "teams", "users", "docs", "all"],
                    "description": "Filter resources by type. Defaults to \"all\"."
                },
                "search": {
                    "type": "string",
                    "description": "Search term to filter resources by name, id, or summary (case-insensitive)"
                },
                "cursor": {
                    "type": "string",
                    "description": "Pagination cursor from a previous response"
                }
            }
        }))
        .build(find_resources_handler)
}

async fn find_resources_handler(ctx: ToolContext, params: Value) -> ToolResult {
    let params: FindResourcesParams =
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let kind = match params.kind.as_deref() {
        None => KindFilter::All,
        Some(value) => KindFilter::from_alias(value)
            .ok_or_else(|| McpError::InvalidParams(format!("Unknown resource type: {}", value)))?,
    };

    let records = ctx.catalog.snapshot().await?;
    let page = run_query(
        &records,
        &QueryParams {
            kind,
            search: params.search,
            cursor: params.cursor,
        },
        ctx.page_size,
    )?;

    ToolsCallResult::json(&page).map_err(|e| McpError::InternalError(e.to_string()))
}

// ============================================================================
// find_resource
// ============================================================================

#[derive(Debug, Deserialize)]
struct FindResourceParams {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    version: Option<String>,
}

fn find_resource_tool() -> RegisteredTool {
    ToolBuilder::new("find_resource")
        .description(
            "Get the documentation body for a single resource in EventCatalog by \
             id and type. When the version is omitted or \"latest\", the version is \
             resolved from the catalog index.",
        )
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "The id of the resource to find"
                },
                "type": {
                    "type": "string",
                    "enum": ["services", "domains", "events", "commands", "queries",
                             "flows", "entities", "channels"],
                    "description": "The type of resource to find"
                },
                "version": {
                    "type": "string",
                    "description": "The version of the resource. Defaults to the latest version in the catalog."
                }
            },
            "required": ["id", "type"]
        }))
        .build(find_resource_handler)
}

async fn find_resource_handler(ctx: ToolContext, params: Value) -> ToolResult {
    let params: FindResourceParams =
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let kind = parse_versioned_kind(&params.kind)?;

    // Omitted or "latest" version resolves through the first matching
    // record in the catalog snapshot.
    let version = match params.version.as_deref() {
        Some(version) if version != "latest" => version.to_string(),
        _ => {
            let records = ctx.catalog.snapshot().await?;
            let found = records
                .iter()
                .find(|record| record.kind == kind && record.id == params.id)
                .and_then(|record| record.version.clone());
            match found {
                Some(version) => version,
                None => {
                    return ToolsCallResult::not_found(&serde_json::json!({
                        "error": "Resource not found",
                        "id": params.id,
                        "type": kind.plural(),
                    }))
                    .map_err(|e| McpError::InternalError(e.to_string()));
                }
            }
        }
    };

    let path = format!(
        "/docs/{}/{}/{}.mdx",
        kind.plural(),
        urlencoding::encode(&params.id),
        urlencoding::encode(&version)
    );

    match ctx.catalog.fetch_doc(&path).await? {
        Some(text) => Ok(ToolsCallResult::text(text)),
        None => ToolsCallResult::not_found(&serde_json::json!({
            "error": "Resource not found",
            "id": params.id,
            "type": kind.plural(),
            "version": version,
        }))
        .map_err(|e| McpError::InternalError(e.to_string())),
    }
}

/// Parse a kind parameter that must name a versioned kind.
pub(crate) fn parse_versioned_kind(value: &str) -> Result<ResourceKind, McpError> {
    let kind = ResourceKind::from_alias(value)
        .ok_or_else(|| McpError::InvalidParams(format!("Unknown resource type: {}", value)))?;
    if !kind.is_versioned() {
        return Err(McpError::InvalidParams(format!(
            "Resource type has no versions: {}",
            value
        )));
    }
    Ok(kind)
}
