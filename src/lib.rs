//! recipe-mcp: an MCP tool server for recipe lookups.
//!
//! Exposes two tools to a calling agent over stdio:
//!
//! - **get_recipe**: SerpApi web search → top organic result → scraped
//!   page text, returned as `"<title>\n\n<text>"`
//! - **search_youtube_vides**: first YouTube video URL for a dish
//!
//! The search, scraping and video logic live in the `recipe_search`
//! workspace crate; this crate adds the [`tools`] layer, the MCP
//! [`mcp`] server and startup [`config`].

pub mod config;
pub mod error;
pub mod mcp;
pub mod tools;

pub use config::ServerConfig;
pub use error::{ConfigError, ToolError};
pub use mcp::{RecipeServer, serve_stdio};
pub use tools::{Tool, ToolRegistry, ToolResult};
