//! MCP client for end-to-end tests
//!
//! Drives the transport-agnostic message handler the way a connected MCP
//! client would: initialize handshake first, then requests with increasing
//! ids. Responses come back as parsed JSON envelopes.

use std::sync::Arc;

use serde_json::{json, Value};

use eventcatalog_mcp::catalog::CatalogClient;
use eventcatalog_mcp::mcp::McpServer;

const TEST_PAGE_SIZE: usize = 50;
const TEST_TIMEOUT_SECS: u64 = 5;

/// MCP test client bound to one server instance.
pub struct McpTestClient {
    server: Arc<McpServer>,
    initialized: bool,
    next_id: i64,
}

impl McpTestClient {
    /// Create a client against a catalog URL and perform the initialize
    /// handshake.
    pub async fn connect(catalog_url: String) -> Self {
        Self::connect_with_page_size(catalog_url, TEST_PAGE_SIZE).await
    }

    /// Like `connect`, with a custom page size for pagination tests.
    pub async fn connect_with_page_size(catalog_url: String, page_size: usize) -> Self {
        let mut client = Self::new_uninitialized(catalog_url, page_size);

        let response = client
            .request(
                "initialize",
                json!({
                    "protocolVersion": "2024-11-05",
                    "capabilities": {},
                    "clientInfo": {"name": "e2e-tests", "version": "0.0.0"}
                }),
            )
            .await;
        assert!(response["result"].is_object(), "initialize failed: {}", response);

        client
    }

    /// Create a client without performing the initialize handshake.
    /// For lifecycle-gating tests.
    pub fn new_uninitialized(catalog_url: String, page_size: usize) -> Self {
        let catalog = Arc::new(CatalogClient::new(catalog_url, TEST_TIMEOUT_SECS));
        let server = Arc::new(McpServer::new(catalog, page_size));

        Self {
            server,
            initialized: false,
            next_id: 0,
        }
    }

    /// Send one request and return the full response envelope.
    pub async fn request(&mut self, method: &str, params: Value) -> Value {
        self.next_id += 1;
        let message = json!({
            "jsonrpc": "2.0",
            "id": self.next_id,
            "method": method,
            "params": params,
        })
        .to_string();

        let response = self
            .server
            .handle_message(&message, &mut self.initialized)
            .await
            .expect("Request unexpectedly produced no response");

        serde_json::to_value(&response).expect("Failed to serialize response")
    }

    /// Send a raw message string, returning the response envelope if any.
    pub async fn send_raw(&mut self, message: &str) -> Option<Value> {
        self.server
            .handle_message(message, &mut self.initialized)
            .await
            .map(|response| serde_json::to_value(&response).expect("Failed to serialize response"))
    }

    /// Call a tool and return the `result` object of the envelope.
    /// Panics if the call produced a protocol fault.
    pub async fn call_tool(&mut self, name: &str, arguments: Value) -> Value {
        let response = self
            .request("tools/call", json!({"name": name, "arguments": arguments}))
            .await;
        assert!(
            response["error"].is_null(),
            "tools/call {} returned a fault: {}",
            name,
            response
        );
        response["result"].clone()
    }

    /// Call a tool expecting a protocol fault; returns the `error` object.
    pub async fn call_tool_expecting_fault(&mut self, name: &str, arguments: Value) -> Value {
        let response = self
            .request("tools/call", json!({"name": name, "arguments": arguments}))
            .await;
        assert!(
            response["error"].is_object(),
            "tools/call {} did not return a fault: {}",
            name,
            response
        );
        response["error"].clone()
    }

    /// Extract the text payload of a tool result.
    pub fn result_text(result: &Value) -> &str {
        result["content"][0]["text"]
            .as_str()
            .expect("Tool result has no text content")
    }

    /// Extract and parse the JSON text payload of a tool result.
    pub fn result_json(result: &Value) -> Value {
        serde_json::from_str(Self::result_text(result)).expect("Tool result text is not JSON")
    }
}
