//! Integration tests for `NewsdataClient::fetch`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no real
//! network traffic is made. Covers the happy path, defensive field decoding,
//! client-side truncation, and every error variant `fetch` can return.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use veille_core::Tone;
use veille_news::{NewsSource, NewsdataClient, SourceError};

fn test_client(base_url: &str) -> NewsdataClient {
    NewsdataClient::with_base_url("test-key", 5, "veille-test/0.1", base_url)
        .expect("failed to build test NewsdataClient")
}

fn article_json(title: &str, pub_date: &str) -> serde_json::Value {
    json!({
        "pubDate": pub_date,
        "title": title,
        "description": format!("{title} description"),
        "source_id": "lemonde",
        "link": "https://example.com/article",
        "language": "fr"
    })
}

#[tokio::test]
async fn fetch_maps_provider_fields_into_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("apikey", "test-key"))
        .and(query_param("q", "BMW"))
        .and(query_param("language", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [article_json("Nouveau SUV", "2024-03-01 10:15:00")]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("BMW", 10, Some("fr")).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.title, "Nouveau SUV");
    assert_eq!(record.content, "Nouveau SUV description");
    assert_eq!(record.source_name, "lemonde");
    assert_eq!(record.url, "https://example.com/article");
    assert_eq!(record.language.as_deref(), Some("fr"));
    assert_eq!(record.tone, Tone::Neutral);
    assert_eq!(
        record.published_at,
        Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 0).unwrap())
    );
}

#[tokio::test]
async fn fetch_returns_empty_when_results_missing() {
    let server = MockServer::start().await;

    // No "results" key at all; the default kicks in.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"status": "success"})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("BMW", 10, None).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn fetch_tolerates_articles_with_all_fields_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [{}, {"title": null, "pubDate": null}]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("BMW", 10, None).await.unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record.title, "");
        assert_eq!(record.content, "");
        assert_eq!(record.published_at, None);
    }
}

#[tokio::test]
async fn fetch_tolerates_wrong_typed_fields_per_field() {
    let server = MockServer::start().await;

    // One article carries a numeric source_id and an array title; only those
    // fields degrade, the batch and its well-formed neighbor survive.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "results": [
                {
                    "pubDate": 20240301,
                    "title": ["not", "a", "string"],
                    "description": "still readable",
                    "source_id": 123,
                    "link": "https://example.com/odd",
                    "language": {"code": "fr"}
                },
                article_json("Well formed", "2024-03-01 10:15:00")
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("BMW", 10, None).await.unwrap();

    assert_eq!(records.len(), 2);
    let odd = &records[0];
    assert_eq!(odd.published_at, None);
    assert_eq!(odd.title, "");
    assert_eq!(odd.content, "still readable");
    assert_eq!(odd.source_name, "");
    assert_eq!(odd.url, "https://example.com/odd");
    assert_eq!(odd.language, None);
    assert_eq!(records[1].title, "Well formed");
}

#[tokio::test]
async fn fetch_truncates_to_max_results_client_side() {
    let server = MockServer::start().await;

    let articles: Vec<_> = (0..8)
        .map(|i| article_json(&format!("Article {i}"), "2024-03-01 10:15:00"))
        .collect();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "results": articles })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let records = client.fetch("BMW", 3, None).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].title, "Article 0");
    assert_eq!(records[2].title, "Article 2");
}

#[tokio::test]
async fn fetch_non_2xx_status_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch("BMW", 10, None).await.unwrap_err();

    assert!(
        matches!(err, SourceError::UnexpectedStatus { status: 429, .. }),
        "expected UnexpectedStatus(429), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_malformed_json_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.fetch("BMW", 10, None).await.unwrap_err();

    assert!(
        matches!(err, SourceError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_unreachable_server_is_transport_error() {
    // Port 1 is never listening.
    let client = test_client("http://127.0.0.1:1/");
    let err = client.fetch("BMW", 10, None).await.unwrap_err();

    assert!(
        matches!(err, SourceError::Transport(_)),
        "expected Transport, got: {err:?}"
    );
}
