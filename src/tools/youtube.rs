//! YouTube tool: returns the first cooking video for a query.

use async_trait::async_trait;
use recipe_search::{SearchConfig, SearchError};

use crate::error::ToolError;

use super::types::{QueryArgs, Tool, ToolResult};

/// Tool that returns the watch URL of the first YouTube result for
/// `"<query> recipes"`.
///
/// The name keeps the historical `vides` spelling so existing agent
/// configurations keep resolving it.
///
/// # Arguments (JSON)
///
/// - `query` (string, required): the dish to find a video for
pub struct YoutubeSearchTool {
    config: SearchConfig,
}

impl YoutubeSearchTool {
    /// Create the tool with the given search settings.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Tool for YoutubeSearchTool {
    fn name(&self) -> &str {
        "search_youtube_vides"
    }

    fn description(&self) -> &str {
        "Search for videos on YouTube to get recipes. Returns the URL of the first video."
    }

    fn schema(&self) -> serde_json::Value {
        QueryArgs::schema()
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = QueryArgs::parse(args)?;

        match recipe_search::find_first_video(&query, &self.config).await {
            Ok(video) => Ok(ToolResult::success(video.url())),
            Err(SearchError::NoVideoFound(_)) => {
                tracing::info!("no YouTube video found");
                Ok(ToolResult::failure(format!(
                    "No video found on YouTube for \"{query}\"."
                )))
            }
            Err(e) => {
                tracing::warn!(error = %e, "YouTube search failed");
                Ok(ToolResult::failure(format!("YouTube search failed: {e}")))
            }
        }
    }
}
