//! Integration tests for `MediastackClient::fetch`.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use veille_news::{MediastackClient, NewsSource, SourceError};

fn test_client(base_url: &str) -> MediastackClient {
    MediastackClient::with_base_url("test-key", 5, "veille-test/0.1", base_url)
        .expect("failed to build test MediastackClient")
}

#[tokio::test]
async fn fetch_maps_provider_fields_into_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("access_key", "test-key"))
        .and(query_param("keywords", "Volvo"))
        .and(query_param("languages", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [{
                "published_at": "2024-03-01T10:15:00+00:00",
                "title": "New EX90 review",
                "description": "The flagship SUV...",
                "source": "reuters",
                "url": "https://example.com/ex90"
            }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("Volvo", 10, Some("en")).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.title, "New EX90 review");
    assert_eq!(record.content, "The flagship SUV...");
    assert_eq!(record.source_name, "reuters");
    assert_eq!(record.url, "https://example.com/ex90");
    assert!(record.published_at.is_some());
    assert_eq!(record.language, None);
}

#[tokio::test]
async fn fetch_returns_empty_when_data_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"pagination": {}})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("Volvo", 10, None).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_tolerates_articles_with_all_fields_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [{}, {"title": null, "url": null}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("Volvo", 10, None).await.unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.title, "");
        assert_eq!(record.content, "");
        assert_eq!(record.url, "");
        assert_eq!(record.published_at, None);
    }
}

#[tokio::test]
async fn fetch_tolerates_wrong_typed_fields_per_field() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [
                {
                    "published_at": 1709287200,
                    "title": "Readable headline",
                    "description": {"nested": true},
                    "source": ["reuters"],
                    "url": "https://example.com/odd"
                },
                {"title": "Well formed", "url": "https://example.com/ok"}
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("Volvo", 10, None).await.unwrap();

    assert_eq!(records.len(), 2);
    let odd = &records[0];
    assert_eq!(odd.published_at, None);
    assert_eq!(odd.title, "Readable headline");
    assert_eq!(odd.content, "");
    assert_eq!(odd.source_name, "");
    assert_eq!(odd.url, "https://example.com/odd");
    assert_eq!(records[1].title, "Well formed");
}

#[tokio::test]
async fn fetch_truncates_to_max_results_client_side() {
    let server = MockServer::start().await;

    let articles: Vec<_> = (0..6)
        .map(|i| json!({"title": format!("Article {i}")}))
        .collect();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "data": articles })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("Volvo", 2, None).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Article 0");
    assert_eq!(records[1].title, "Article 1");
}

#[tokio::test]
async fn fetch_non_2xx_status_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch("Volvo", 10, None).await.unwrap_err();

    assert!(
        matches!(err, SourceError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_malformed_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>error</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch("Volvo", 10, None).await.unwrap_err();

    assert!(
        matches!(err, SourceError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}
