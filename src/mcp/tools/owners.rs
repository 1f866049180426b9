//! Owner Tools
//!
//! Resolves an owner id against the catalog's user namespace first, then
//! the team namespace.

use serde::Deserialize;
use serde_json::Value;

use crate::mcp::context::ToolContext;
use crate::mcp::protocol::{McpError, ToolsCallResult};
use crate::mcp::registry::{McpRegistry, RegisteredTool, ToolBuilder, ToolResult};

/// Register owner tools with the registry
pub fn register_tools(registry: &mut McpRegistry) {
    registry.register_tool(find_owners_tool());
}

#[derive(Debug, Deserialize)]
struct FindOwnersParams {
    id: String,
}

fn find_owners_tool() -> RegisteredTool {
    ToolBuilder::new("find_owners")
        .description(
            "Find the owner (a user or a team) of a resource in EventCatalog by \
             owner id. The user namespace is searched first, then teams.",
        )
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "id": {
                    "type": "string",
                    "description": "The id of the owner (user or team) to find"
                }
            },
            "required": ["id"]
        }))
        .build(find_owners_handler)
}

async fn find_owners_handler(ctx: ToolContext, params: Value) -> ToolResult {
    let params: FindOwnersParams =
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let id = params.id.trim().to_string();
    if id.is_empty() {
        return Err(McpError::InvalidParams("Owner id is required".to_string()));
    }

    let encoded = urlencoding::encode(&id).into_owned();

    for namespace in ["users", "teams"] {
        let path = format!("/docs/{}/{}.mdx", namespace, encoded);
        if let Some(content) = ctx.catalog.fetch_doc(&path).await? {
            let owner_type = if namespace == "users" { "user" } else { "team" };
            let payload = serde_json::json!({
                "type": owner_type,
                "id": id,
                "name": id,
                "content": content,
                "mimeType": "text/markdown",
                "url": format!("{}/docs/{}/{}", ctx.catalog_url(), namespace, encoded),
            });
            return ToolsCallResult::json(&payload)
                .map_err(|e| McpError::InternalError(e.to_string()));
        }
    }

    ToolsCallResult::not_found(&serde_json::json!({
        "error": "Owner not found",
        "message": format!("No user or team found with id '{}'", id),
        "searchedUrls": [
            format!("{}/docs/users/{}", ctx.catalog_url(), encoded),
            format!("{}/docs/teams/{}", ctx.catalog_url(), encoded),
        ],
    }))
    .map_err(|e| McpError::InternalError(e.to_string()))
}
