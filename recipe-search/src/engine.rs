//! Trait definition for pluggable web search backends.
//!
//! The recipe orchestrator only needs "give me the top organic result for
//! this query". [`SearchProvider`] captures that so SerpApi can be swapped
//! for another backend or a test double.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::SearchResult;

/// A web search backend that returns at most one organic result.
///
/// Each implementation handles its own:
///
/// - query augmentation (suffix and site exclusions from the config)
/// - HTTP request and authentication
/// - response parsing into a [`SearchResult`]
///
/// All implementations must be `Send + Sync` so tools can share them
/// across concurrent calls.
pub trait SearchProvider: Send + Sync {
    /// Look up the first organic result for `query`.
    ///
    /// Returns `Ok(None)` when the provider reports no organic results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchProvider`] if the request fails or the
    /// response cannot be understood.
    fn find_top_result(
        &self,
        query: &str,
        config: &SearchConfig,
    ) -> impl std::future::Future<Output = Result<Option<SearchResult>, SearchError>> + Send;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A canned provider for exercising trait bounds and async execution.
    struct MockProvider {
        result: Option<SearchResult>,
        fail: bool,
    }

    impl SearchProvider for MockProvider {
        async fn find_top_result(
            &self,
            _query: &str,
            _config: &SearchConfig,
        ) -> Result<Option<SearchResult>, SearchError> {
            if self.fail {
                return Err(SearchError::SearchProvider("mock provider failure".into()));
            }
            Ok(self.result.clone())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn mock_provider_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockProvider>();
    }

    #[tokio::test]
    async fn mock_provider_returns_result() {
        let provider = MockProvider {
            result: Some(SearchResult {
                title: "Lasagne".into(),
                link: Some("https://example.com/lasagne".into()),
            }),
            fail: false,
        };
        let result = provider
            .find_top_result("lasagne", &SearchConfig::default())
            .await
            .expect("should succeed");
        assert_eq!(result.map(|r| r.title), Some("Lasagne".to_string()));
    }

    #[tokio::test]
    async fn mock_provider_propagates_errors() {
        let provider = MockProvider {
            result: None,
            fail: true,
        };
        let err = provider
            .find_top_result("lasagne", &SearchConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("mock provider failure"));
    }
}
