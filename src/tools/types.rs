//! Core tool types.
//!
//! Defines the [`Tool`] trait that both tools implement, the [`ToolResult`]
//! they return, and the shared `{ "query": string }` argument shape.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::ToolError;

/// Result of a tool execution.
///
/// A failed result is still a normal response: the agent receives the
/// error text flagged as a tool error instead of a protocol failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Whether the tool execution succeeded.
    pub success: bool,
    /// Output content.
    pub content: String,
    /// Error message if the tool execution failed.
    pub error: Option<String>,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(content: String) -> Self {
        Self {
            success: true,
            content,
            error: None,
        }
    }

    /// Create a failed tool result with an error message.
    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            content: String::new(),
            error: Some(error),
        }
    }

    /// The text shown to the agent: the content, or the error message.
    pub fn text(&self) -> &str {
        match self.error {
            Some(ref error) if !self.success => error,
            _ => &self.content,
        }
    }
}

/// A named, described operation exposed to agents.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name used for dispatch.
    fn name(&self) -> &str;

    /// Description shown to agents for tool discovery.
    fn description(&self) -> &str;

    /// JSON Schema of the tool's arguments.
    fn schema(&self) -> serde_json::Value;

    /// Run the tool.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Validation`] for malformed arguments. Expected
    /// failures (no video, provider down) are `Ok(ToolResult::failure(..))`.
    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, ToolError>;
}

/// Arguments shared by both tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QueryArgs {
    /// The query to search for. Leading and trailing whitespace is trimmed.
    pub query: String,
}

impl QueryArgs {
    /// JSON Schema for [`QueryArgs`].
    pub fn schema() -> serde_json::Value {
        schemars::schema_for!(QueryArgs).to_value()
    }

    /// Deserialize and validate tool arguments, returning the trimmed query.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Validation`] if `query` is missing, not a
    /// string, or blank.
    pub fn parse(args: serde_json::Value) -> Result<String, ToolError> {
        let args: QueryArgs = serde_json::from_value(args)
            .map_err(|e| ToolError::Validation(format!("invalid arguments: {e}")))?;
        let query = args.query.trim();
        if query.is_empty() {
            return Err(ToolError::Validation("query must not be empty".into()));
        }
        Ok(query.to_owned())
    }
}
