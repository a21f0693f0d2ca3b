//! Feed download tests against a mock HTTP server.
//!
//! The reader uses a blocking client, so each request runs on a
//! blocking thread while the mock server lives on the runtime.

use appcast::download::download_appcast_xml;
use appcast::http::create_client;
use appcast::{fetch_appcast, AppcastError, FeedConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
  <channel>
    <item>
      <title>Version 2.0</title>
      <enclosure url="https://example.com/app-2.0.exe" sparkle:version="2.0" sparkle:os="windows"/>
    </item>
  </channel>
</rss>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appcast.xml"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_appcast_success() {
    let mock_server = serve(200, FEED).await;
    let url = format!("{}/appcast.xml", mock_server.uri());

    let result =
        tokio::task::spawn_blocking(move || fetch_appcast(&url, &FeedConfig::default()))
            .await
            .expect("join");

    let release = result.expect("fetch should succeed");
    assert_eq!(release.title, "Version 2.0");
    assert_eq!(release.download_url.as_deref(), Some("https://example.com/app-2.0.exe"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_appcast_not_found() {
    let mock_server = serve(404, "").await;
    let url = format!("{}/appcast.xml", mock_server.uri());

    let result = {
        let url = url.clone();
        tokio::task::spawn_blocking(move || fetch_appcast(&url, &FeedConfig::default()))
            .await
            .expect("join")
    };

    match result {
        Err(AppcastError::FeedDownload { url: failed, .. }) => assert_eq!(failed, url),
        other => panic!("expected download error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_rejects_oversized_feed() {
    let mock_server = serve(200, FEED).await;
    let url = format!("{}/appcast.xml", mock_server.uri());

    let result = tokio::task::spawn_blocking(move || {
        let client = create_client()?;
        download_appcast_xml(&client, &url, 16)
    })
    .await
    .expect("join");

    assert!(matches!(
        result,
        Err(AppcastError::ResponseTooLarge { limit: 16, .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_errors_are_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/appcast.xml"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;
    let url = format!("{}/appcast.xml", mock_server.uri());

    let result =
        tokio::task::spawn_blocking(move || fetch_appcast(&url, &FeedConfig::default()))
            .await
            .expect("join");

    assert!(matches!(
        result,
        Err(AppcastError::RetriesExhausted { attempts: 3, .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetched_feed_without_items() {
    let mock_server = serve(200, "<rss><channel><title>empty</title></channel></rss>").await;
    let url = format!("{}/appcast.xml", mock_server.uri());

    let result =
        tokio::task::spawn_blocking(move || fetch_appcast(&url, &FeedConfig::default()))
            .await
            .expect("join");

    assert!(matches!(result, Err(AppcastError::NoItemsFound)));
}
