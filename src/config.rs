use std::env;

use anyhow::Result;

use crate::edgar::client::DEFAULT_USER_AGENT;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret and nothing is required: the defaults run the
/// built-in watchlist. A .env file is loaded automatically at startup via
/// dotenvy.
pub struct Config {
    /// Declared User-Agent for EDGAR requests (TENK_USER_AGENT). The SEC
    /// fair-access policy asks automated tools to identify themselves, so
    /// put a real contact address here for anything beyond a smoke test.
    pub user_agent: String,
    /// Default watchlist file (TENK_FILINGS). The --filings flag overrides
    /// this; when neither is set the built-in watchlist is used.
    pub filings_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            user_agent: env::var("TENK_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            filings_path: env::var("TENK_FILINGS").ok(),
        })
    }
}
