//! Core types flowing through a recipe or video lookup.
//!
//! Every value here lives for a single call; nothing is stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title fallback when a scraped page has no usable `<h1>`.
pub const NO_TITLE: &str = "No Title Found";

/// Root of the canonical watch URLs returned by the video finder.
pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Length of a YouTube video id.
pub const VIDEO_ID_LEN: usize = 11;

/// The top organic result of a web search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result page. `None` when the provider omitted it or
    /// sent an empty string.
    pub link: Option<String>,
}

/// Outcome of scraping one recipe page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapedRecipe {
    /// The page was fetched and its text extracted.
    Scraped {
        /// First `<h1>` text, or [`NO_TITLE`].
        title: String,
        /// Visible text nodes joined with newlines.
        text: String,
    },
    /// The page could not be fetched.
    Failed {
        /// Human-readable failure reason.
        error: String,
    },
}

impl ScrapedRecipe {
    /// Returns true if the page was fetched successfully.
    pub fn is_scraped(&self) -> bool {
        matches!(self, Self::Scraped { .. })
    }
}

/// A single video found on YouTube.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoReference {
    id: String,
}

impl VideoReference {
    /// Wrap an already-extracted video id.
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The 11-character video id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The canonical watch URL, `https://www.youtube.com/watch?v=<id>`.
    pub fn url(&self) -> String {
        format!("{WATCH_URL_PREFIX}{}", self.id)
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{WATCH_URL_PREFIX}{}", self.id)
    }
}
