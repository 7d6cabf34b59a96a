//! Recipe lookup: top search result → scraped page → flattened text.
//!
//! [`get_recipe`] composes a [`SearchProvider`] with the page scraper and
//! reports one of four outcomes. Only a failing search provider is an
//! `Err`; empty results and scrape failures are ordinary outcomes whose
//! [`Display`](fmt::Display) is the message shown to the agent.

use std::fmt;

use crate::config::SearchConfig;
use crate::content;
use crate::engine::SearchProvider;
use crate::error::SearchError;
use crate::types::ScrapedRecipe;

/// Message when the search returned no organic results.
pub const NO_RECIPE_FOUND: &str = "No recipe found";

/// Message when the top result carried no link.
pub const NO_RECIPE_LINK: &str = "No recipe link found in search results.";

/// Prefix of the message when the recipe page could not be fetched.
pub const SCRAPE_ERROR_PREFIX: &str = "Error scraping recipe: ";

/// What a recipe lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeOutcome {
    /// The search returned no organic results.
    NotFound,
    /// The top result had no link to follow.
    MissingLink {
        /// Title of the linkless result.
        title: String,
    },
    /// The top result's page could not be fetched.
    ScrapeFailed {
        /// The page that failed.
        link: String,
        /// Why it failed.
        error: String,
    },
    /// The recipe page was scraped.
    Found {
        /// The page the recipe came from.
        link: String,
        /// Page title.
        title: String,
        /// Visible page text.
        text: String,
    },
}

impl RecipeOutcome {
    /// Returns true if a recipe page was scraped.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

impl fmt::Display for RecipeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str(NO_RECIPE_FOUND),
            Self::MissingLink { .. } => f.write_str(NO_RECIPE_LINK),
            Self::ScrapeFailed { error, .. } => write!(f, "{SCRAPE_ERROR_PREFIX}{error}"),
            Self::Found { title, text, .. } => write!(f, "{title}\n\n{text}"),
        }
    }
}

/// Find a recipe page for `query` and scrape it.
///
/// Takes only the first organic result; there is no fallback to later
/// results when it fails to scrape.
///
/// # Errors
///
/// Returns [`SearchError::SearchProvider`] if the search itself fails.
pub async fn get_recipe<P: SearchProvider>(
    provider: &P,
    config: &SearchConfig,
    query: &str,
) -> Result<RecipeOutcome, SearchError> {
    let Some(top) = provider.find_top_result(query, config).await? else {
        tracing::info!(provider = provider.name(), "no recipe found");
        return Ok(RecipeOutcome::NotFound);
    };

    let Some(link) = top.link else {
        tracing::info!(title = %top.title, "top result has no link");
        return Ok(RecipeOutcome::MissingLink { title: top.title });
    };

    tracing::debug!(link = %link, "scraping top recipe result");
    let outcome = match content::scrape(&link, config).await {
        ScrapedRecipe::Scraped { title, text } => RecipeOutcome::Found { link, title, text },
        ScrapedRecipe::Failed { error } => RecipeOutcome::ScrapeFailed { link, error },
    };
    Ok(outcome)
}
