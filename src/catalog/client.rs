//! HTTP client for the external EventCatalog instance.
//!
//! Owns the process's one manifest cache: the llms.txt body is fetched at
//! most meaningfully once per client lifetime and memoized. Concurrent
//! first access may fetch twice, but both writers store an equivalent
//! value. No retries; transfer failures propagate to the caller.

use anyhow::{Context, Result};
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

use super::parser;
use super::ResourceRecord;

/// Path of the manifest document on the catalog host.
pub const MANIFEST_PATH: &str = "/docs/llm/llms.txt";

/// HTTP client for communicating with an EventCatalog instance.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    manifest_cache: RwLock<Option<String>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the catalog (e.g., "https://demo.eventcatalog.dev")
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        // Ensure base_url doesn't have trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            manifest_cache: RwLock::new(None),
        }
    }

    /// Get the base URL of the catalog.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the llms.txt manifest, memoized for the client lifetime.
    pub async fn manifest_text(&self) -> Result<String> {
        if let Some(cached) = self.manifest_cache.read().unwrap().clone() {
            return Ok(cached);
        }

        let url = format!("{}{}", self.base_url, MANIFEST_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch catalog manifest")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Manifest request failed with status: {}",
                response.status()
            );
        }

        let text = response
            .text()
            .await
            .context("Failed to read manifest body")?;

        *self.manifest_cache.write().unwrap() = Some(text.clone());
        Ok(text)
    }

    /// Fetch and parse the manifest into resource records.
    pub async fn snapshot(&self) -> Result<Vec<ResourceRecord>> {
        let text = self.manifest_text().await?;
        let (records, skipped) = parser::parse_with_diagnostics(&text);
        if !skipped.is_empty() {
            debug!(
                "Dropped {} unparseable manifest bullet lines (first at line {})",
                skipped.len(),
                skipped[0].line_number
            );
        }
        Ok(records)
    }

    /// Reset the memoized manifest. Intended for tests.
    pub fn clear_cache(&self) {
        *self.manifest_cache.write().unwrap() = None;
    }

    /// GET a catalog path and return the body text.
    ///
    /// Returns `Ok(None)` on a non-success status so callers can distinguish
    /// an absent document from a transfer failure.
    pub async fn fetch_doc(&self, path: &str) -> Result<Option<String>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", url))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let text = response
            .text()
            .await
            .context("Failed to read response body")?;
        Ok(Some(text))
    }
}
