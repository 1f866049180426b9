//! Schema Tools
//!
//! Retrieves the schema document published for a versioned resource.

use serde::Deserialize;
use serde_json::Value;

use super::catalog::parse_versioned_kind;
use crate::mcp::context::ToolContext;
use crate::mcp::protocol::{McpError, ToolsCallResult};
use crate::mcp::registry::{McpRegistry, RegisteredTool, ToolBuilder, ToolResult};

/// Register schema tools with the registry
pub fn register_tools(registry: &mut McpRegistry) {
    registry.register_tool(get_schema_tool());
}

#[derive(Debug, Deserialize)]
struct GetSchemaParams {
    id: String,
    version: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    specification: Option<String>,
}

fn get_schema_tool() -> RegisteredTool {
    ToolBuilder::new("get_schema")
        .description(
            "Return the schema for a service, event, command or query in \
             EventCatalog by id, version and type. An optional specification \
             variant selects between multiple published specifications.",
        )
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "The id of the resource"
                },
                "version": {
                    "type": "string",
                    "description": "The version of the resource"
                },
                "type": {
                    "type": "string",
                    "enum": ["services", "domains", "events", "commands", "queries",
                             "flows", "entities", "channels"],
                    "description": "The type of resource"
                },
                "specification": {
                    "type": "string",
                    "description": "Optional specification variant (e.g. asyncapi, openapi)"
                }
            },
            "required": ["id", "version", "type"]
        }))
        .build(get_schema_handler)
}

async fn get_schema_handler(ctx: ToolContext, params: Value) -> ToolResult {
    let params: GetSchemaParams =
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let kind = parse_versioned_kind(&params.kind)?;

    let mut path = format!(
        "/api/schemas/{}/{}/{}",
        kind.plural(),
        urlencoding::encode(&params.id),
        urlencoding::encode(&params.version)
    );
    if let Some(specification) = params.specification.as_deref() {
        path.push('/');
        path.push_str(&urlencoding::encode(specification));
    }

    match ctx.catalog.fetch_doc(&path).await? {
        Some(text) => Ok(ToolsCallResult::text(text)),
        None => ToolsCallResult::not_found(&serde_json::json!({
            "error": "Schema not found",
            "id": params.id,
            "type": kind.plural(),
            "version": params.version,
        }))
        .map_err(|e| McpError::InternalError(e.to_string())),
    }
}
