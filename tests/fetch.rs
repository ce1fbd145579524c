mod common;

use common::{article_server, init_test_tracing, test_config, STOCKS_PAGE};
use newsgist::scraper::{FetchError, Fetcher};
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn extracts_paragraphs_from_served_page() {
    init_test_tracing();
    let server = article_server(STOCKS_PAGE).await;
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    let url = format!("{}/article", server.uri());
    let article = fetcher.fetch(&url).await.unwrap();

    assert_eq!(article.text, "Stocks rose today. Analysts are optimistic.");
    assert_eq!(article.url, url);
}

#[tokio::test]
async fn page_without_paragraphs_is_empty_not_an_error() {
    let server = article_server("<html><body><div>No paragraphs</div></body></html>").await;
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    let article = fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();

    assert!(article.is_empty());
}

#[tokio::test]
async fn error_status_body_is_still_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<p>Page not found.</p>"))
        .mount(&server)
        .await;
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    let article = fetcher.fetch(&format!("{}/gone", server.uri())).await.unwrap();

    assert_eq!(article.text, "Page not found.");
}

#[tokio::test]
async fn sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();
}

#[tokio::test]
async fn refused_connection_is_a_fetch_error() {
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    let err = fetcher.fetch("http://127.0.0.1:1/article").await.unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
    assert!(err
        .to_string()
        .starts_with("failed to fetch news from http://127.0.0.1:1/article"));
}

#[tokio::test]
async fn malformed_url_is_a_fetch_error() {
    let fetcher = Fetcher::new(&test_config().fetch).unwrap();

    let err = fetcher.fetch("not a url").await.unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<p>late</p>")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;
    let mut config = test_config();
    config.fetch.timeout_secs = 1;
    let fetcher = Fetcher::new(&config.fetch).unwrap();

    let err = fetcher
        .fetch(&format!("{}/slow", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }));
}

#[tokio::test]
async fn extraction_does_not_depend_on_llm_settings() {
    let server = article_server(STOCKS_PAGE).await;
    let mut config = test_config();
    config.agent.provider = "openai".to_string();
    config.agent.prompt = Some("no slot".to_string());
    assert!(newsgist::Pipeline::from_config(&config).is_err());

    let fetcher = Fetcher::new(&config.fetch).unwrap();
    let article = fetcher
        .fetch(&format!("{}/article", server.uri()))
        .await
        .unwrap();

    assert_eq!(article.text, "Stocks rose today. Analysts are optimistic.");
}
