//! # recipe-search
//!
//! Recipe and cooking-video lookup for agent tools.
//!
//! ## Design
//!
//! - Web search through SerpApi's Google engine, with social and video
//!   platforms excluded and only the first organic result kept
//! - Recipe pages fetched with a desktop User-Agent and flattened to
//!   title + visible text
//! - YouTube's public results page scraped for the first video link, no
//!   API key needed
//! - No caching, no retries: each call is one or two sequential requests
//!
//! ## Security
//!
//! - The SerpApi key never appears in logs, `Debug` output or error messages
//! - Queries are logged only at debug/trace level

pub mod config;
pub mod content;
pub mod engine;
pub mod engines;
pub mod error;
pub mod http;
pub mod recipe;
pub mod types;

pub use config::SearchConfig;
pub use engine::SearchProvider;
pub use engines::SerpApiProvider;
pub use error::{Result, SearchError};
pub use recipe::RecipeOutcome;
pub use types::{ScrapedRecipe, SearchResult, VideoReference};

/// Find a recipe for `query` with SerpApi and scrape the top result.
///
/// Validates `config` first, then delegates to [`recipe::get_recipe`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config, or
/// [`SearchError::SearchProvider`] if the search fails. Empty results and
/// scrape failures are [`RecipeOutcome`] variants, not errors.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> recipe_search::Result<()> {
/// let provider = recipe_search::SerpApiProvider::new("my-serpapi-key");
/// let config = recipe_search::SearchConfig::default();
/// let outcome = recipe_search::get_recipe(&provider, &config, "banana bread").await?;
/// println!("{outcome}");
/// # Ok(())
/// # }
/// ```
pub async fn get_recipe<P: SearchProvider>(
    provider: &P,
    config: &SearchConfig,
    query: &str,
) -> Result<RecipeOutcome> {
    config.validate()?;
    recipe::get_recipe(provider, config, query).await
}

/// Find the first YouTube video for `query`.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid config,
/// [`SearchError::VideoLookup`] if YouTube cannot be reached, or
/// [`SearchError::NoVideoFound`] if the results page lists no video.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> recipe_search::Result<()> {
/// let video = recipe_search::find_first_video("pancakes", &Default::default()).await?;
/// println!("{}", video.url());
/// # Ok(())
/// # }
/// ```
pub async fn find_first_video(query: &str, config: &SearchConfig) -> Result<VideoReference> {
    config.validate()?;
    engines::youtube::find_first_video(query, config).await
}

/// Fetch a page and extract its title and visible text.
///
/// Failures come back as [`ScrapedRecipe::Failed`].
pub async fn scrape(url: &str, config: &SearchConfig) -> ScrapedRecipe {
    content::scrape(url, config).await
}
