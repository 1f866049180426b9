//! MCP Message Handler
//!
//! Transport-agnostic dispatch of MCP messages: parse, route by method,
//! envelope the result. Transports (stdio, HTTP) only move message text in
//! and response text out.

use std::sync::Arc;

use tracing::{debug, info};

use super::context::ToolContext;
use super::protocol::{
    methods, InitializeParams, InitializeResult, McpError, McpRequest, McpResponse, PingResult,
    ResourcesCapability, ResourcesListResult, ResourcesReadParams, ResourcesReadResult,
    ServerCapabilities, ServerInfo, ToolsCallParams, ToolsCapability, ToolsListResult,
    MCP_PROTOCOL_VERSION,
};
use super::registry::McpRegistry;
use super::{resources, tools};
use crate::catalog::CatalogClient;

/// Server name reported during the initialize handshake
pub const SERVER_NAME: &str = "EventCatalog MCP Server";

/// The MCP server: a registry of tools and resources plus the shared
/// execution context handed to their handlers.
pub struct McpServer {
    registry: Arc<McpRegistry>,
    context: ToolContext,
}

impl McpServer {
    pub fn new(catalog: Arc<CatalogClient>, page_size: usize) -> Self {
        let mut registry = McpRegistry::new();
        tools::register_all_tools(&mut registry);
        resources::register_all_resources(&mut registry);

        info!(
            "MCP registry initialized with {} tools and {} resources",
            registry.tool_count(),
            registry.resource_count()
        );

        let context = ToolContext {
            catalog,
            page_size,
            server_version: format!("{}-{}", env!("CARGO_PKG_VERSION"), env!("GIT_HASH")),
        };

        Self {
            registry: Arc::new(registry),
            context,
        }
    }

    /// Handle a single MCP message.
    ///
    /// Returns `None` for notifications, which produce no response. The
    /// `initialized` flag is connection state owned by the transport;
    /// stateless transports pass a flag that is already set.
    pub async fn handle_message(&self, text: &str, initialized: &mut bool) -> Option<McpResponse> {
        let request: McpRequest = match serde_json::from_str(text) {
            Ok(req) => req,
            Err(e) => {
                return Some(McpResponse::error(None, McpError::ParseError(e.to_string())));
            }
        };

        let request_id = request.id.clone();

        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(&request, initialized).await,
            methods::INITIALIZED => {
                // Notification, no response needed
                return None;
            }
            methods::PING => self.handle_ping().await,
            methods::TOOLS_LIST => {
                if !*initialized {
                    Err(McpError::InvalidRequest("Not initialized".to_string()))
                } else {
                    self.handle_tools_list().await
                }
            }
            methods::TOOLS_CALL => {
                if !*initialized {
                    Err(McpError::InvalidRequest("Not initialized".to_string()))
                } else {
                    self.handle_tools_call(&request).await
                }
            }
            methods::RESOURCES_LIST => {
                if !*initialized {
                    Err(McpError::InvalidRequest("Not initialized".to_string()))
                } else {
                    self.handle_resources_list().await
                }
            }
            methods::RESOURCES_READ => {
                if !*initialized {
                    Err(McpError::InvalidRequest("Not initialized".to_string()))
                } else {
                    self.handle_resources_read(&request).await
                }
            }
            methods::SHUTDOWN => {
                // Client is disconnecting gracefully
                return None;
            }
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        // A request without an id is a notification; swallow its outcome.
        let request_id = match request_id {
            Some(id) => id,
            None => {
                debug!("Dropping response for id-less request: {}", request.method);
                return None;
            }
        };

        Some(match result {
            Ok(value) => McpResponse::success(request_id, value),
            Err(error) => McpResponse::error(Some(request_id), error),
        })
    }

    async fn handle_initialize(
        &self,
        request: &McpRequest,
        initialized: &mut bool,
    ) -> Result<serde_json::Value, McpError> {
        if let Some(params) = request.params.clone() {
            let params: InitializeParams = serde_json::from_value(params)
                .map_err(|e| McpError::InvalidParams(e.to_string()))?;
            debug!(
                "MCP client connected: {} {}",
                params.client_info.name, params.client_info.version
            );
        }

        *initialized = true;

        let result = InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: None }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: None,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: self.context.server_version.clone(),
            },
        };

        serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
    }

    async fn handle_ping(&self) -> Result<serde_json::Value, McpError> {
        serde_json::to_value(PingResult {}).map_err(|e| McpError::InternalError(e.to_string()))
    }

    async fn handle_tools_list(&self) -> Result<serde_json::Value, McpError> {
        let result = ToolsListResult {
            tools: self.registry.list_tools(),
        };

        serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
    }

    async fn handle_tools_call(&self, request: &McpRequest) -> Result<serde_json::Value, McpError> {
        let params: ToolsCallParams = request
            .params
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::InvalidParams(e.to_string()))?
            .ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;

        let tool = self
            .registry
            .get_tool(&params.name)
            .ok_or_else(|| McpError::MethodNotFound(format!("Unknown tool: {}", params.name)))?;

        let arguments = params.arguments.unwrap_or(serde_json::json!({}));
        let result = (tool.handler)(self.context.clone(), arguments).await?;

        serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
    }

    async fn handle_resources_list(&self) -> Result<serde_json::Value, McpError> {
        let result = ResourcesListResult {
            resources: self.registry.list_resources(),
        };

        serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
    }

    async fn handle_resources_read(
        &self,
        request: &McpRequest,
    ) -> Result<serde_json::Value, McpError> {
        let params: ResourcesReadParams = request
            .params
            .clone()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| McpError::InvalidParams(e.to_string()))?
            .ok_or_else(|| McpError::InvalidParams("Missing params".to_string()))?;

        let resource = self
            .registry
            .find_resource(&params.uri)
            .ok_or_else(|| McpError::ResourceNotFound(params.uri.clone()))?;

        let contents = (resource.handler)(self.context.clone(), params.uri).await?;

        let result = ResourcesReadResult { contents };

        serde_json::to_value(result).map_err(|e| McpError::InternalError(e.to_string()))
    }
}
