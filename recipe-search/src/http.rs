//! Shared HTTP client construction for outbound requests.
//!
//! Provides a configured [`reqwest::Client`] with the browser-like
//! User-Agent from [`SearchConfig`], cookie support and compressed
//! response decoding.

use crate::config::SearchConfig;
use crate::error::SearchError;

/// Build a [`reqwest::Client`] configured for search and scraping requests.
///
/// The client has:
/// - Cookie store enabled (for YouTube consent redirects)
/// - User-Agent from config
/// - Brotli and gzip decompression
/// - No client-wide timeout; callers that need one set it per request
///
/// # Errors
///
/// Returns [`SearchError::Config`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .user_agent(config.user_agent.as_str())
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Config(format!("failed to build HTTP client: {e}")))
}
