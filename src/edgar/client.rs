// EDGAR archive client: plain HTTP GET over reqwest.
//
// The SEC fair-access policy requires automated tools to declare who they
// are via the User-Agent header, so the client is always built with one.
// There is nothing protocol-shaped here: each filing is a single HTML page
// fetched by URL.

use anyhow::{Context, Result};
use tracing::debug;

/// Default declared User-Agent. Override with TENK_USER_AGENT to put your
/// own contact address in it, per the SEC fair-access guidelines.
pub const DEFAULT_USER_AGENT: &str = "tenk/0.1 (10-K topic research; tenk@example.com)";

/// HTTP client for fetching filing documents from the EDGAR archive.
pub struct EdgarClient {
    client: reqwest::Client,
}

impl EdgarClient {
    /// Create a new client with the given declared User-Agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Fetch a filing's raw HTML by URL.
    ///
    /// Returns the response body as text. Non-success statuses are errors;
    /// the caller decides whether a failed fetch drops the document or
    /// aborts the run.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!(url = url, "Fetching filing");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("EDGAR returned {status} for {url}");
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body: {url}"))
    }
}
