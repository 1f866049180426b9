//! End-to-end tests for the get_schema tool

mod common;

use common::{McpTestClient, MockCatalog};
use serde_json::json;

#[tokio::test]
async fn test_fetch_schema() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client
        .call_tool(
            "get_schema",
            json!({"id": "OrderPlaced", "version": "1.0.0", "type": "events"}),
        )
        .await;

    assert!(result.get("isError").is_none());
    let schema = McpTestClient::result_json(&result);
    assert_eq!(schema["type"], "object");
}

#[tokio::test]
async fn test_fetch_schema_with_specification_variant() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client
        .call_tool(
            "get_schema",
            json!({
                "id": "OrderService",
                "version": "0.4.0",
                "type": "services",
                "specification": "asyncapi"
            }),
        )
        .await;

    assert_eq!(McpTestClient::result_text(&result), "asyncapi: 3.0.0");
}

#[tokio::test]
async fn test_missing_schema_is_error_flagged_result() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client
        .call_tool(
            "get_schema",
            json!({"id": "OrderShipped", "version": "2.0.0", "type": "events"}),
        )
        .await;

    assert_eq!(result["isError"], true);
    let payload = McpTestClient::result_json(&result);
    assert_eq!(payload["error"], "Schema not found");
    assert_eq!(payload["id"], "OrderShipped");
}

#[tokio::test]
async fn test_missing_version_is_invalid_params_fault() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let error = client
        .call_tool_expecting_fault("get_schema", json!({"id": "OrderPlaced", "type": "events"}))
        .await;
    assert_eq!(error["code"], -32602);
}
