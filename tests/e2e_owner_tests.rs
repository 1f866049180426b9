//! End-to-end tests for the find_owners tool
//!
//! Covers the user-then-team fallback chain and the not-found payload that
//! lists both searched locations.

mod common;

use common::{McpTestClient, MockCatalog};
use serde_json::json;

#[tokio::test]
async fn test_user_namespace_wins() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client.call_tool("find_owners", json!({"id": "jdoe"})).await;
    let payload = McpTestClient::result_json(&result);

    assert_eq!(payload["type"], "user");
    assert_eq!(payload["id"], "jdoe");
    assert_eq!(payload["name"], "jdoe");
    assert_eq!(payload["mimeType"], "text/markdown");
    assert!(payload["content"].as_str().unwrap().contains("John Doe"));
    assert_eq!(
        payload["url"],
        format!("{}/docs/users/jdoe", catalog.base_url)
    );
}

#[tokio::test]
async fn test_falls_back_to_team_namespace() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client
        .call_tool("find_owners", json!({"id": "platform"}))
        .await;
    let payload = McpTestClient::result_json(&result);

    assert_eq!(payload["type"], "team");
    assert_eq!(
        payload["url"],
        format!("{}/docs/teams/platform", catalog.base_url)
    );
}

#[tokio::test]
async fn test_unknown_owner_lists_both_searched_locations() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let result = client
        .call_tool("find_owners", json!({"id": "nonexistent"}))
        .await;

    assert_eq!(result["isError"], true);
    let payload = McpTestClient::result_json(&result);
    assert_eq!(payload["error"], "Owner not found");
    assert_eq!(
        payload["searchedUrls"],
        json!([
            format!("{}/docs/users/nonexistent", catalog.base_url),
            format!("{}/docs/teams/nonexistent", catalog.base_url),
        ])
    );
}

#[tokio::test]
async fn test_blank_owner_id_is_invalid_params_fault() {
    let catalog = MockCatalog::spawn_default().await;
    let mut client = McpTestClient::connect(catalog.base_url.clone()).await;

    let error = client
        .call_tool_expecting_fault("find_owners", json!({"id": "   "}))
        .await;
    assert_eq!(error["code"], -32602);
}
