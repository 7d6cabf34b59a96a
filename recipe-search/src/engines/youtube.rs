//! YouTube video finder: scrapes the public results page, no API key.
//!
//! The results page is mostly a JavaScript bootstrap blob, so instead of
//! walking the DOM we scan the raw HTML for the first `watch?v=<id>` link.

use regex::Regex;
use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::{VideoReference, VIDEO_ID_LEN};

/// Find the first video YouTube lists for `"<query> recipes"`.
///
/// # Errors
///
/// Returns [`SearchError::VideoLookup`] if the results page cannot be
/// fetched, or [`SearchError::NoVideoFound`] if it contains no video link.
pub async fn find_first_video(query: &str, config: &SearchConfig) -> Result<VideoReference, SearchError> {
    let search_query = config.suffixed_query(query);
    tracing::debug!(query = %search_query, "YouTube search");

    let url = results_url(&config.youtube_base_url, &search_query)?;
    let client = http::build_client(config)?;

    let response = client
        .get(url)
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| SearchError::VideoLookup(format!("YouTube request failed: {e}")))?
        .error_for_status()
        .map_err(|e| SearchError::VideoLookup(format!("YouTube HTTP error: {e}")))?;

    let html = response
        .text()
        .await
        .map_err(|e| SearchError::VideoLookup(format!("YouTube response read failed: {e}")))?;

    tracing::trace!(bytes = html.len(), "YouTube response received");

    match extract_video_id(&html)? {
        Some(id) => {
            let video = VideoReference::new(id);
            tracing::debug!(id = video.id(), "YouTube video found");
            Ok(video)
        }
        None => Err(SearchError::NoVideoFound(search_query)),
    }
}

/// Build `<base>/results?search_query=<query>` with `+` for spaces.
fn results_url(base: &str, search_query: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(&format!("{}/results", base.trim_end_matches('/')))
        .map_err(|e| SearchError::Config(format!("invalid youtube_base_url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("search_query", search_query);
    Ok(url)
}

/// Return the id of the first `watch?v=` link in raw results-page HTML.
///
/// An id is exactly eleven non-whitespace characters.
pub(crate) fn extract_video_id(html: &str) -> Result<Option<&str>, SearchError> {
    let pattern = Regex::new(&format!(r"watch\?v=(\S{{{VIDEO_ID_LEN}}})"))
        .map_err(|e| SearchError::VideoLookup(format!("invalid video id pattern: {e}")))?;
    Ok(pattern
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_RESULTS_HTML: &str = r#"<!DOCTYPE html>
<html><head><title>pancakes recipes - YouTube</title></head>
<body>
<script>var ytInitialData = {"contents":[
  {"videoRenderer":{"videoId":"abcdefghijk","navigationEndpoint":{"commandMetadata":{"webCommandMetadata":{"url":"/watch?v=abcdefghijk"}}}}},
  {"videoRenderer":{"videoId":"ZYXWVUTSRQP","navigationEndpoint":{"commandMetadata":{"webCommandMetadata":{"url":"/watch?v=ZYXWVUTSRQP"}}}}}
]};</script>
</body></html>"#;

    #[test]
    fn extract_takes_first_id() {
        let id = extract_video_id(MOCK_RESULTS_HTML).expect("pattern compiles");
        assert_eq!(id, Some("abcdefghijk"));
    }

    #[test]
    fn extract_requires_eleven_characters() {
        let id = extract_video_id("/watch?v=short x").expect("pattern compiles");
        assert_eq!(id, None);
    }

    #[test]
    fn extract_stops_at_eleven_characters() {
        let id = extract_video_id("href=\"/watch?v=dQw4w9WgXcQ&list=PL1\"").expect("pattern compiles");
        assert_eq!(id, Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn extract_none_when_no_links() {
        let html = "<html><body>No results</body></html>";
        assert_eq!(extract_video_id(html).expect("pattern compiles"), None);
    }

    #[test]
    fn results_url_encodes_spaces_as_plus() {
        let url = results_url("https://www.youtube.com", "mac & cheese recipes").expect("valid");
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/results?search_query=mac+%26+cheese+recipes"
        );
    }

    #[test]
    fn results_url_tolerates_trailing_slash() {
        let url = results_url("http://127.0.0.1:9000/", "x recipes").expect("valid");
        assert_eq!(url.path(), "/results");
    }

    #[test]
    fn results_url_rejects_garbage_base() {
        let err = results_url("not a url", "x").unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[tokio::test]
    #[ignore] // Live test: run with `cargo test -- --ignored`
    async fn live_youtube_search() {
        let video = find_first_video("pancakes", &SearchConfig::default())
            .await
            .expect("live lookup should work");
        assert_eq!(video.id().len(), VIDEO_ID_LEN);
    }
}
