//! Server configuration, built once at startup and shared read-only.

use std::fmt;

use recipe_search::SearchConfig;

use crate::error::ConfigError;

/// Environment variable holding the SerpApi key.
pub const SERPAPI_KEY_VAR: &str = "SERPAPI_KEY";

/// Everything the tools need: the SerpApi credential and search settings.
#[derive(Clone)]
pub struct ServerConfig {
    /// SerpApi API key. Never logged.
    pub serpapi_key: String,
    /// Endpoints, query policy and scraping settings.
    pub search: SearchConfig,
}

impl ServerConfig {
    /// Load from the process environment, reading a `.env` file in the
    /// working directory first if one exists. Variables already set in the
    /// environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if `SERPAPI_KEY` is unset
    /// or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "failed to read .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup, with default search settings.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let serpapi_key = lookup(SERPAPI_KEY_VAR)
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingCredential(SERPAPI_KEY_VAR))?;

        let config = Self {
            serpapi_key,
            search: SearchConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the embedded [`SearchConfig`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serpapi_key.trim().is_empty() {
            return Err(ConfigError::MissingCredential(SERPAPI_KEY_VAR));
        }
        self.search.validate()?;
        Ok(())
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("serpapi_key", &"<redacted>")
            .field("search", &self.search)
            .finish()
    }
}
