//! Search configuration with production defaults.
//!
//! [`SearchConfig`] controls where requests go, how queries are augmented,
//! and how recipe pages are fetched. The defaults target the public SerpApi
//! and YouTube endpoints; tests point the base URLs at a mock server.

use crate::error::SearchError;

/// Desktop browser User-Agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Sites filtered out of recipe searches. Social and video platforms rarely
/// carry scrapeable recipe text.
pub const DEFAULT_EXCLUDED_SITES: &[&str] = &[
    "youtube.com",
    "instagram.com",
    "facebook.com",
    "tiktok.com",
    "pinterest.com",
    "twitter.com",
];

/// Configuration shared by the search client, page scraper and video finder.
///
/// Use [`Default::default()`] for production values, or construct with
/// field overrides.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// SerpApi root, without the `/search.json` path.
    pub serpapi_base_url: String,
    /// YouTube root used to fetch the results page.
    pub youtube_base_url: String,
    /// Search engine SerpApi should query.
    pub engine: String,
    /// Geographic location the search is scoped to.
    pub location: String,
    /// Interface language (`hl`) of the search.
    pub language: String,
    /// Value of the `max_results` parameter sent to the provider.
    pub max_results: usize,
    /// Word appended to every user query.
    pub query_suffix: String,
    /// Domains excluded from recipe searches with `-site:` operators.
    pub excluded_sites: Vec<String>,
    /// Timeout for fetching a recipe page, in seconds.
    pub scrape_timeout_seconds: u64,
    /// User-Agent header for all outbound requests.
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            serpapi_base_url: "https://serpapi.com".into(),
            youtube_base_url: "https://www.youtube.com".into(),
            engine: "google".into(),
            location: "United States".into(),
            language: "en".into(),
            max_results: 1,
            query_suffix: "recipes".into(),
            excluded_sites: DEFAULT_EXCLUDED_SITES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            scrape_timeout_seconds: 10,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `scrape_timeout_seconds` must be greater than 0
    /// - `query_suffix` must not be blank
    /// - base URLs must not be blank
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_results == 0 {
            return Err(SearchError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.scrape_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "scrape_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.query_suffix.trim().is_empty() {
            return Err(SearchError::Config("query_suffix must not be empty".into()));
        }
        if self.serpapi_base_url.trim().is_empty() {
            return Err(SearchError::Config(
                "serpapi_base_url must not be empty".into(),
            ));
        }
        if self.youtube_base_url.trim().is_empty() {
            return Err(SearchError::Config(
                "youtube_base_url must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Append the configured suffix to a user query: `"pasta"` → `"pasta recipes"`.
    pub fn suffixed_query(&self, query: &str) -> String {
        format!("{query} {}", self.query_suffix)
    }

    /// Build the full recipe search query with `-site:` exclusions.
    pub fn recipe_query(&self, query: &str) -> String {
        let mut q = self.suffixed_query(query);
        for site in &self.excluded_sites {
            q.push_str(" -site:");
            q.push_str(site);
        }
        q
    }
}
