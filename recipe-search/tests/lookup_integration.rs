//! Integration tests for the recipe and video lookups.
//!
//! SerpApi, the recipe page and YouTube are all served by a local
//! `wiremock` server; no real network calls are made.

use recipe_search::config::DEFAULT_USER_AGENT;
use recipe_search::{
    RecipeOutcome, ScrapedRecipe, SearchConfig, SearchError, SerpApiProvider,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> SearchConfig {
    SearchConfig {
        serpapi_base_url: server.uri(),
        youtube_base_url: server.uri(),
        scrape_timeout_seconds: 2,
        ..Default::default()
    }
}

async fn mount_serpapi(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ────────────────────────────────────────────────────────────────────────────
// Search client
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_request_carries_fixed_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param(
            "q",
            "chicken parmesan recipes -site:youtube.com -site:instagram.com \
             -site:facebook.com -site:tiktok.com -site:pinterest.com -site:twitter.com",
        ))
        .and(query_param("engine", "google"))
        .and(query_param("location", "United States"))
        .and(query_param("hl", "en"))
        .and(query_param("max_results", "1"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let provider = SerpApiProvider::new("test-key");
    let outcome = recipe_search::get_recipe(&provider, &config_for(&server), "chicken parmesan")
        .await
        .expect("should succeed");
    assert_eq!(outcome, RecipeOutcome::NotFound);
}

#[tokio::test]
async fn provider_http_error_is_search_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid API key."})),
        )
        .mount(&server)
        .await;

    let provider = SerpApiProvider::new("secret-key-value");
    let err = recipe_search::get_recipe(&provider, &config_for(&server), "soup")
        .await
        .unwrap_err();

    assert!(matches!(err, SearchError::SearchProvider(_)));
    let message = err.to_string();
    assert!(message.contains("401"), "got: {message}");
    assert!(message.contains("Invalid API key."), "got: {message}");
    assert!(!message.contains("secret-key-value"), "key leaked: {message}");
}

#[tokio::test]
async fn unreachable_provider_is_search_provider_error() {
    let config = SearchConfig {
        serpapi_base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    };
    let provider = SerpApiProvider::new("secret-key-value");
    let err = recipe_search::get_recipe(&provider, &config, "soup")
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::SearchProvider(_)));
    assert!(!err.to_string().contains("secret-key-value"));
}

// ────────────────────────────────────────────────────────────────────────────
// Recipe orchestration
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn zero_organic_results_returns_no_recipe_found() {
    let server = MockServer::start().await;
    mount_serpapi(&server, json!({"search_metadata": {"status": "Success"}})).await;

    let provider = SerpApiProvider::new("test-key");
    let outcome = recipe_search::get_recipe(&provider, &config_for(&server), "chicken parmesan")
        .await
        .expect("should succeed");
    assert_eq!(outcome.to_string(), "No recipe found");
}

#[tokio::test]
async fn result_without_link_returns_no_link_message() {
    let server = MockServer::start().await;
    mount_serpapi(&server, json!({"organic_results": [{"title": "Stew"}]})).await;

    let provider = SerpApiProvider::new("test-key");
    let outcome = recipe_search::get_recipe(&provider, &config_for(&server), "stew")
        .await
        .expect("should succeed");
    assert_eq!(outcome.to_string(), "No recipe link found in search results.");
}

#[tokio::test]
async fn successful_scrape_returns_title_blank_line_text() {
    let server = MockServer::start().await;
    let link = format!("{}/recipes/pasta", server.uri());
    mount_serpapi(
        &server,
        json!({"organic_results": [
            {"title": "Pasta | Example Kitchen", "link": link},
            {"title": "Ignored", "link": "https://ignored.example.com"}
        ]}),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/recipes/pasta"))
        .and(|req: &wiremock::Request| {
            req.headers
                .get("user-agent")
                .is_some_and(|ua| ua.as_bytes() == DEFAULT_USER_AGENT.as_bytes())
        })
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><h1>Pasta</h1><p>Boil water.</p></body></html>")
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = SerpApiProvider::new("test-key");
    let outcome = recipe_search::get_recipe(&provider, &config_for(&server), "pasta")
        .await
        .expect("should succeed");

    assert!(outcome.is_found());
    assert_eq!(outcome.to_string(), "Pasta\n\nPasta\nBoil water.");
}

#[tokio::test]
async fn scrape_404_returns_error_scraping_message() {
    let server = MockServer::start().await;
    let link = format!("{}/gone", server.uri());
    mount_serpapi(&server, json!({"organic_results": [{"title": "Gone", "link": link}]})).await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let provider = SerpApiProvider::new("test-key");
    let outcome = recipe_search::get_recipe(&provider, &config_for(&server), "gone")
        .await
        .expect("should succeed");

    let message = outcome.to_string();
    assert!(
        message.starts_with("Error scraping recipe: "),
        "got: {message}"
    );
    assert!(message.contains("404"), "got: {message}");
}

#[tokio::test]
async fn slow_page_times_out_as_scrape_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<h1>Late</h1>")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = SearchConfig {
        scrape_timeout_seconds: 1,
        ..config_for(&server)
    };
    let result = recipe_search::scrape(&format!("{}/slow", server.uri()), &config).await;
    assert!(matches!(result, ScrapedRecipe::Failed { .. }));
}

// ────────────────────────────────────────────────────────────────────────────
// Video finder
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn first_video_id_becomes_watch_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .and(query_param("search_query", "mac and cheese recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<script>{"url":"/watch?v=AAAAAAAAAAA"},{"url":"/watch?v=BBBBBBBBBBB"}</script>"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let video = recipe_search::find_first_video("mac and cheese", &config_for(&server))
        .await
        .expect("should find a video");
    assert_eq!(video.url(), "https://www.youtube.com/watch?v=AAAAAAAAAAA");
}

#[tokio::test]
async fn page_without_videos_is_no_video_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>No results</html>"))
        .mount(&server)
        .await;

    let err = recipe_search::find_first_video("qwzxv", &config_for(&server))
        .await
        .unwrap_err();
    match err {
        SearchError::NoVideoFound(query) => assert_eq!(query, "qwzxv recipes"),
        other => panic!("expected NoVideoFound, got {other:?}"),
    }
}

#[tokio::test]
async fn youtube_server_error_is_video_lookup_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/results"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = recipe_search::find_first_video("soup", &config_for(&server))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::VideoLookup(_)));
}
