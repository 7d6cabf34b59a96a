//! MCP stdio server binary for the recipe tools.
//!
//! Reads `SERPAPI_KEY` (optionally from `.env`), then serves MCP over
//! stdin/stdout. All tracing output goes to stderr so that stdout remains
//! a clean protocol channel.

use recipe_mcp::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("recipe-mcp starting");

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        anyhow::anyhow!("recipe-mcp configuration failed: {e}")
    })?;

    recipe_mcp::serve_stdio(&config).await.map_err(|e| {
        tracing::error!(error = %e, "recipe-mcp exited with error");
        anyhow::anyhow!("recipe-mcp failed: {e}")
    })?;

    tracing::info!("recipe-mcp shut down cleanly");
    Ok(())
}
