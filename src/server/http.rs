//! HTTP transport
//!
//! Stateless JSON-RPC over HTTP POST: each request body carries one
//! complete MCP message. There is no session, so lifecycle gating is
//! disabled and every request is treated as already initialized.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use crate::mcp::McpServer;

/// Build the HTTP router. Exposed so tests can serve it on an ephemeral
/// listener.
pub fn make_router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route("/mcp", post(mcp_post_handler))
        .with_state(server)
}

/// Serve MCP over HTTP POST at `/mcp` on the given port.
pub async fn run_http_server(server: Arc<McpServer>, port: u16) -> Result<()> {
    let app = make_router(server);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Serving MCP over HTTP at http://{}/mcp", addr);

    axum::serve(listener, app).await.context("HTTP server failed")
}

async fn mcp_post_handler(State(server): State<Arc<McpServer>>, body: String) -> Response {
    let mut initialized = true;
    match server.handle_message(&body, &mut initialized).await {
        Some(response) => Json(response).into_response(),
        // Notifications get no body back
        None => StatusCode::ACCEPTED.into_response(),
    }
}
