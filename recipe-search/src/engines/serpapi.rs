//! SerpApi search provider: Google results through the SerpApi JSON API.
//!
//! Sends one GET to `/search.json` with the augmented query and returns the
//! first entry of `organic_results`. Paid results live in a separate
//! `ads` array and never reach the organic list.

use std::fmt;

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::engine::SearchProvider;
use crate::error::SearchError;
use crate::http;
use crate::types::SearchResult;

/// SerpApi-backed [`SearchProvider`].
///
/// Holds the API key; everything else comes from [`SearchConfig`].
#[derive(Clone)]
pub struct SerpApiProvider {
    api_key: String,
}

impl SerpApiProvider {
    /// Create a provider authenticating with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for SerpApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerpApiProvider")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: Option<String>,
}

impl SearchProvider for SerpApiProvider {
    async fn find_top_result(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> Result<Option<SearchResult>, SearchError> {
        let q = config.recipe_query(query);
        tracing::debug!(query = %q, "SerpApi search");

        let client = http::build_client(config)?;
        let endpoint = format!(
            "{}/search.json",
            config.serpapi_base_url.trim_end_matches('/')
        );
        let max_results = config.max_results.to_string();

        // `without_url` keeps the api_key query parameter out of messages.
        let response = client
            .get(&endpoint)
            .query(&[
                ("q", q.as_str()),
                ("engine", config.engine.as_str()),
                ("location", config.location.as_str()),
                ("hl", config.language.as_str()),
                ("max_results", max_results.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                SearchError::SearchProvider(format!("SerpApi request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SearchError::SearchProvider(format!(
                "SerpApi response read failed: {}",
                e.without_url()
            ))
        })?;

        if !status.is_success() {
            let detail = serde_json::from_str::<SerpApiResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .unwrap_or_else(|| status.to_string());
            return Err(SearchError::SearchProvider(format!(
                "SerpApi returned {}: {detail}",
                status.as_u16()
            )));
        }

        tracing::trace!(bytes = body.len(), "SerpApi response received");
        parse_serpapi_response(&body)
    }

    fn name(&self) -> &'static str {
        "SerpApi"
    }
}

/// Parse a successful SerpApi JSON body into the top organic result.
///
/// Extracted as a separate function for testability with canned JSON.
pub(crate) fn parse_serpapi_response(body: &str) -> Result<Option<SearchResult>, SearchError> {
    let parsed: SerpApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::SearchProvider(format!("invalid SerpApi response: {e}")))?;

    if let Some(ref message) = parsed.error {
        // SerpApi reports "no results" as a 200 with an error field.
        tracing::warn!(error = %message, "SerpApi reported an error with a success status");
    }

    let top = parsed.organic_results.into_iter().next().map(|r| SearchResult {
        title: r.title.trim().to_owned(),
        link: r
            .link
            .map(|l| l.trim().to_owned())
            .filter(|l| !l.is_empty()),
    });

    tracing::debug!(found = top.is_some(), "SerpApi results parsed");
    Ok(top)
}
