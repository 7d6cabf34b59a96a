//! Error types for the recipe-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys appear in error messages.

/// Errors that can occur during recipe and video lookups.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The web search provider could not be reached or returned a failure.
    #[error("search provider error: {0}")]
    SearchProvider(String),

    /// A recipe page could not be fetched.
    ///
    /// The page scraper folds this into [`crate::ScrapedRecipe::Failed`];
    /// it only surfaces from the lower-level [`crate::content::fetch_page`].
    #[error("scrape error: {0}")]
    Scrape(String),

    /// The YouTube results page could not be fetched.
    #[error("video lookup failed: {0}")]
    VideoLookup(String),

    /// The YouTube results page held no video link for the query.
    #[error("no video found for query: {0}")]
    NoVideoFound(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for recipe-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
