//! Recipe page scraping: fetch a page and flatten it to title + text.
//!
//! Nothing recipe-specific happens here: the title is the first `<h1>` and
//! the body is every visible text node of the page, one per line.

use std::time::Duration;

use scraper::{Html, Selector};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;
use crate::types::{ScrapedRecipe, NO_TITLE};

/// Elements whose contents are code or inert markup rather than text.
/// `<title>` and `<noscript>` text is kept.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Fetch `url` and extract its title and visible text.
///
/// Never fails: network errors, timeouts and non-success statuses come back
/// as [`ScrapedRecipe::Failed`] so the caller decides how to present them.
pub async fn scrape(url: &str, config: &SearchConfig) -> ScrapedRecipe {
    match fetch_page(url, config).await {
        Ok(html) => {
            let recipe = extract_recipe(&html);
            tracing::debug!(url, "recipe page scraped");
            recipe
        }
        Err(SearchError::Scrape(error)) | Err(SearchError::Config(error)) => {
            tracing::warn!(url, error = %error, "error fetching recipe page");
            ScrapedRecipe::Failed { error }
        }
        Err(other) => {
            tracing::warn!(url, error = %other, "error fetching recipe page");
            ScrapedRecipe::Failed {
                error: other.to_string(),
            }
        }
    }
}

/// Download the raw HTML at `url` with the configured User-Agent and
/// scrape timeout.
///
/// # Errors
///
/// Returns [`SearchError::Scrape`] on network failure, timeout or a
/// non-success status.
pub async fn fetch_page(url: &str, config: &SearchConfig) -> Result<String> {
    let client = http::build_client(config)?;

    let response = client
        .get(url)
        .timeout(Duration::from_secs(config.scrape_timeout_seconds))
        .send()
        .await
        .map_err(|e| SearchError::Scrape(e.to_string()))?
        .error_for_status()
        .map_err(|e| SearchError::Scrape(e.to_string()))?;

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::Scrape(e.to_string()))?;

    tracing::trace!(bytes = html.len(), "recipe page received");
    Ok(html)
}

/// Extract the title and visible text from raw HTML.
///
/// Extracted as a separate function for testability without a network.
pub fn extract_recipe(html: &str) -> ScrapedRecipe {
    let document = Html::parse_document(html);
    ScrapedRecipe::Scraped {
        title: extract_title(&document),
        text: extract_text(&document),
    }
}

/// Trimmed text of the first `<h1>`, or [`NO_TITLE`] when missing or blank.
fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("h1") else {
        return NO_TITLE.to_owned();
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_owned())
}

/// Every visible text node in document order, trimmed, blank ones dropped,
/// joined with `\n`.
fn extract_text(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
            });
            if hidden {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
