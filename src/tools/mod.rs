//! Tool system for the recipe server.
//!
//! # Tools
//!
//! - **get_recipe**: search the web for a recipe and return the page text
//! - **search_youtube_vides**: return the first YouTube video for a dish

pub mod get_recipe;
pub mod registry;
pub mod types;
pub mod youtube;

pub use get_recipe::GetRecipeTool;
pub use registry::ToolRegistry;
pub use types::{QueryArgs, Tool, ToolResult};
pub use youtube::YoutubeSearchTool;
