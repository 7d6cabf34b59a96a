//! Recipe tool: searches the web for a recipe and returns the page text.
//!
//! Every expected outcome is a plain string: the recipe, "No recipe found",
//! the missing-link message, or "Error scraping recipe: ...". Only a
//! failing search provider is reported as a tool error.

use async_trait::async_trait;
use recipe_search::{SearchConfig, SearchProvider, SerpApiProvider};

use crate::config::ServerConfig;
use crate::error::ToolError;

use super::types::{QueryArgs, Tool, ToolResult};

/// Tool that finds a recipe page for a query and returns its title and text.
///
/// # Arguments (JSON)
///
/// - `query` (string, required): what to cook
pub struct GetRecipeTool<P = SerpApiProvider> {
    provider: P,
    config: SearchConfig,
}

impl GetRecipeTool<SerpApiProvider> {
    /// SerpApi-backed tool using the server's credential and search settings.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            SerpApiProvider::new(config.serpapi_key.clone()),
            config.search.clone(),
        )
    }
}

impl<P: SearchProvider> GetRecipeTool<P> {
    /// Create a tool over any search provider.
    pub fn new(provider: P, config: SearchConfig) -> Self {
        Self { provider, config }
    }
}

#[async_trait]
impl<P: SearchProvider + 'static> Tool for GetRecipeTool<P> {
    fn name(&self) -> &str {
        "get_recipe"
    }

    fn description(&self) -> &str {
        "Get a recipe from a given query. Returns the recipe page title and its text."
    }

    fn schema(&self) -> serde_json::Value {
        QueryArgs::schema()
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = QueryArgs::parse(args)?;

        match recipe_search::get_recipe(&self.provider, &self.config, &query).await {
            Ok(outcome) => {
                tracing::info!(found = outcome.is_found(), "get_recipe finished");
                Ok(ToolResult::success(outcome.to_string()))
            }
            Err(e) => {
                tracing::warn!(error = %e, provider = self.provider.name(), "recipe search failed");
                Ok(ToolResult::failure(format!("Recipe search failed: {e}")))
            }
        }
    }
}
