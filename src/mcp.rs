//! MCP stdio server exposing the tool registry.
//!
//! Tool calls are dispatched by name to the [`ToolRegistry`]. A tool that
//! fails in an expected way produces a normal `CallToolResult` flagged as
//! an error, so the agent sees a textual explanation and the server keeps
//! running. Only unknown tools and malformed arguments are protocol errors.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    model::{
        CallToolRequestParam, CallToolResult, Content, JsonObject, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool as McpTool,
    },
    service::RequestContext,
    transport::stdio,
};

use crate::config::ServerConfig;
use crate::error::ToolError;
use crate::tools::ToolRegistry;

/// MCP server handler backed by a [`ToolRegistry`].
#[derive(Clone)]
pub struct RecipeServer {
    registry: Arc<ToolRegistry>,
}

impl RecipeServer {
    /// Server with both recipe tools wired to `config`.
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_registry(ToolRegistry::with_recipe_tools(config))
    }

    /// Server over an arbitrary registry.
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// MCP metadata for every registered tool, sorted by name.
    pub fn tool_list(&self) -> Vec<McpTool> {
        self.registry
            .tools()
            .into_iter()
            .map(|tool| {
                let schema = match tool.schema() {
                    serde_json::Value::Object(obj) => obj,
                    _ => JsonObject::new(),
                };
                McpTool::new(
                    tool.name().to_string(),
                    tool.description().to_string(),
                    Arc::new(schema),
                )
            })
            .collect()
    }

    /// Run the named tool with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns `invalid_params` for an unknown tool or malformed arguments.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {name}"), None))?;

        let args = serde_json::Value::Object(arguments.unwrap_or_default());

        tracing::debug!(tool = name, "tool call");
        match tool.execute(args).await {
            Ok(result) if result.success => {
                Ok(CallToolResult::success(vec![Content::text(result.content)]))
            }
            Ok(result) => {
                tracing::info!(tool = name, "tool reported failure");
                Ok(CallToolResult::error(vec![Content::text(
                    result.text().to_owned(),
                )]))
            }
            Err(ToolError::Validation(message)) => {
                Err(McpError::invalid_params(message, None))
            }
            Err(e) => {
                tracing::error!(tool = name, error = %e, "tool execution failed");
                Ok(CallToolResult::error(vec![Content::text(
                    e.message().to_owned(),
                )]))
            }
        }
    }
}

impl ServerHandler for RecipeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "recipes: find a recipe page for a dish (get_recipe) or a YouTube cooking \
                 video (search_youtube_vides). Both take a single `query` string."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.tool_list();
        tracing::debug!(count = tools.len(), "serving tool list");
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }
}

/// Serve the recipe tools over stdin/stdout until the client disconnects.
///
/// # Errors
///
/// Returns an error if the MCP handshake fails or the service task panics.
pub async fn serve_stdio(config: &ServerConfig) -> anyhow::Result<()> {
    let server = RecipeServer::new(config);
    tracing::info!(tools = ?server.registry.names(), "starting MCP stdio server");

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| anyhow::anyhow!("MCP initialisation failed: {e}"))?;
    let reason = service.waiting().await?;

    tracing::info!(?reason, "MCP stdio server stopped");
    Ok(())
}
