//! Stdio transport
//!
//! Line-delimited JSON-RPC over stdin/stdout. One connection per process;
//! the initialize handshake gates the session.

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::mcp::McpServer;

/// Serve MCP on stdin/stdout until stdin closes.
pub async fn run_stdio_server(server: Arc<McpServer>) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    let mut initialized = false;

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if let Some(response) = server.handle_message(message, &mut initialized).await {
            let json = serde_json::to_string(&response)?;
            stdout.write_all(json.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    debug!("stdin closed, shutting down");
    Ok(())
}
