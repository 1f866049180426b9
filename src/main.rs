use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eventcatalog_mcp::catalog::CatalogClient;
use eventcatalog_mcp::config::{AppConfig, Transport, DEFAULT_PAGE_SIZE};
use eventcatalog_mcp::mcp::McpServer;
use eventcatalog_mcp::server::{run_http_server, run_stdio_server};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the EventCatalog instance to front.
    /// Falls back to the EVENTCATALOG_URL environment variable.
    pub catalog_url: Option<String>,

    /// Transport to serve MCP on.
    #[clap(long, value_enum, default_value = "stdio")]
    pub transport: Transport,

    /// The port to listen on (http transport only).
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Number of records per page for listing tools.
    #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Timeout in seconds for catalog requests.
    #[clap(long, default_value_t = 30)]
    pub request_timeout_sec: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // stdout carries protocol messages on the stdio transport; logs go to
    // stderr on both transports.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let config = AppConfig::resolve(
        cli_args.catalog_url,
        cli_args.transport,
        cli_args.port,
        cli_args.page_size,
        cli_args.request_timeout_sec,
    )?;

    info!("Using EventCatalog at {}", config.catalog_url);

    let catalog = Arc::new(CatalogClient::new(
        config.catalog_url.clone(),
        config.request_timeout_sec,
    ));
    let server = Arc::new(McpServer::new(catalog, config.page_size));

    match config.transport {
        Transport::Stdio => run_stdio_server(server).await,
        Transport::Http => run_http_server(server, config.port).await,
    }
}
