//! Guide Tools
//!
//! Plain-text catalog documents: the service producer/consumer index and
//! per-domain ubiquitous language pages.

use serde::Deserialize;
use serde_json::Value;

use crate::mcp::context::ToolContext;
use crate::mcp::protocol::{McpError, ToolsCallResult};
use crate::mcp::registry::{McpRegistry, RegisteredTool, ToolBuilder, ToolResult};

/// Path of the producers/consumers index on the catalog host.
const SERVICES_INDEX_PATH: &str = "/docs/llm/llms-services.txt";

/// Register guide tools with the registry
pub fn register_tools(registry: &mut McpRegistry) {
    registry.register_tool(find_producers_and_consumers_tool());
    registry.register_tool(explain_ubiquitous_language_tool());
}

// ============================================================================
// find_producers_and_consumers
// ============================================================================

fn find_producers_and_consumers_tool() -> RegisteredTool {
    ToolBuilder::new("find_producers_and_consumers")
        .description(
            "Get the producers (sends) and consumers (receives) for every \
             service in EventCatalog.",
        )
        .build(find_producers_and_consumers_handler)
}

async fn find_producers_and_consumers_handler(ctx: ToolContext, _params: Value) -> ToolResult {
    match ctx.catalog.fetch_doc(SERVICES_INDEX_PATH).await? {
        Some(text) => Ok(ToolsCallResult::text(text)),
        None => ToolsCallResult::not_found(&serde_json::json!({
            "error": "Service index not found",
            "url": format!("{}{}", ctx.catalog_url(), SERVICES_INDEX_PATH),
        }))
        .map_err(|e| McpError::InternalError(e.to_string())),
    }
}

// ============================================================================
// explain_ubiquitous_language_terms
// ============================================================================

#[derive(Debug, Deserialize)]
struct ExplainLanguageParams {
    domain: String,
}

fn explain_ubiquitous_language_tool() -> RegisteredTool {
    ToolBuilder::new("explain_ubiquitous_language_terms")
        .description(
            "Explain the ubiquitous language terms documented for a domain in \
             EventCatalog.",
        )
        .input_schema(serde_json::json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "The domain that contains the ubiquitous language terms"
                }
            },
            "required": ["domain"]
        }))
        .build(explain_ubiquitous_language_handler)
}

async fn explain_ubiquitous_language_handler(ctx: ToolContext, params: Value) -> ToolResult {
    let params: ExplainLanguageParams =
        serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

    let path = format!(
        "/docs/domains/{}/language.mdx",
        urlencoding::encode(&params.domain)
    );

    match ctx.catalog.fetch_doc(&path).await? {
        Some(text) => Ok(ToolsCallResult::text(text)),
        None => ToolsCallResult::not_found(&serde_json::json!({
            "error": "Ubiquitous language not found",
            "domain": params.domain,
        }))
        .map_err(|e| McpError::InternalError(e.to_string())),
    }
}
