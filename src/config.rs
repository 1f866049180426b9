//! Server configuration
//!
//! Resolved once at startup from CLI arguments and environment variables.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;

/// Default number of records per page for listing tools.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Environment variable naming the catalog instance to front.
pub const CATALOG_URL_ENV: &str = "EVENTCATALOG_URL";

/// Transport the MCP server speaks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    Stdio,
    Http,
}

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_url: String,
    pub transport: Transport,
    pub port: u16,
    pub page_size: usize,
    pub request_timeout_sec: u64,
}

impl AppConfig {
    /// Resolve configuration. The catalog URL comes from the CLI argument
    /// or, when absent, from `EVENTCATALOG_URL`; it must parse as a URL.
    pub fn resolve(
        catalog_url: Option<String>,
        transport: Transport,
        port: u16,
        page_size: usize,
        request_timeout_sec: u64,
    ) -> Result<Self> {
        let catalog_url = catalog_url
            .or_else(|| std::env::var(CATALOG_URL_ENV).ok())
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let catalog_url = match catalog_url {
            Some(url) => url,
            None => bail!(
                "Catalog URL must be given as an argument or via {}",
                CATALOG_URL_ENV
            ),
        };

        reqwest::Url::parse(&catalog_url)
            .with_context(|| format!("Catalog URL is not a valid URL: {}", catalog_url))?;

        if page_size == 0 {
            bail!("Page size must be at least 1");
        }

        Ok(Self {
            catalog_url,
            transport,
            port,
            page_size,
            request_timeout_sec,
        })
    }
}
