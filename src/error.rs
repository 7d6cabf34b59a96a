//! Error types for the recipe-mcp server.
//!
//! Tool errors carry a stable error code (SCREAMING_SNAKE_CASE) that is
//! included in the Display output and accessible via [`ToolError::code()`].

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// Missing or invalid startup configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

    /// Tool arguments failed validation.
    pub const TOOL_VALIDATION: &str = "TOOL_VALIDATION";

    /// Tool execution failed.
    pub const TOOL_FAILED: &str = "TOOL_FAILED";
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required credential is missing or empty.
    #[error("[{}] missing required credential: {}", error_codes::CONFIG_INVALID, .0)]
    MissingCredential(&'static str),

    /// A configuration value is invalid.
    #[error("[{}] {}", error_codes::CONFIG_INVALID, .0)]
    Invalid(String),
}

impl From<recipe_search::SearchError> for ConfigError {
    fn from(err: recipe_search::SearchError) -> Self {
        Self::Invalid(err.to_string())
    }
}

/// Errors produced while dispatching or executing a tool.
///
/// The Display impl formats as `[CODE] message`.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Arguments missing or malformed.
    #[error("[{}] {}", error_codes::TOOL_VALIDATION, .0)]
    Validation(String),

    /// The tool ran but could not complete.
    #[error("[{}] {}", error_codes::TOOL_FAILED, .0)]
    Execution(String),
}

impl ToolError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => error_codes::TOOL_VALIDATION,
            Self::Execution(_) => error_codes::TOOL_FAILED,
        }
    }

    /// Returns the inner message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Execution(m) => m,
        }
    }
}
