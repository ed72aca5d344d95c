use super::*;

fn test_client(base_url: &str) -> NewsdataClient {
    NewsdataClient::with_base_url("test-key", 5, "veille-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[test]
fn build_url_with_language() {
    let client = test_client("https://newsdata.io/api/1/news");
    let url = client.build_url("BMW", Some("fr"));
    assert_eq!(
        url.as_str(),
        "https://newsdata.io/api/1/news?apikey=test-key&q=BMW&language=fr&page=1"
    );
}

#[test]
fn build_url_omits_language_for_wildcard() {
    let client = test_client("https://newsdata.io/api/1/news");
    let url = client.build_url("BMW", None);
    assert_eq!(
        url.as_str(),
        "https://newsdata.io/api/1/news?apikey=test-key&q=BMW&page=1"
    );
}

#[test]
fn build_url_encodes_query_term() {
    let client = test_client("https://newsdata.io/api/1/news");
    let url = client.build_url("Alfa Romeo & co", Some("en"));
    assert!(
        url.as_str().contains("q=Alfa+Romeo+%26+co"),
        "query term should be percent-encoded: {url}"
    );
}

#[test]
fn with_base_url_rejects_invalid_url() {
    let result = NewsdataClient::with_base_url("k", 5, "ua", "not a url");
    assert!(
        matches!(result, Err(SourceError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl"
    );
}

#[test]
fn map_item_fills_missing_fields_with_empty_strings() {
    let item = NewsdataItem {
        pub_date: None,
        title: None,
        description: None,
        source_id: None,
        link: None,
        language: None,
    };
    let record = NewsdataClient::map_item(item);
    assert_eq!(record.published_at, None);
    assert_eq!(record.title, "");
    assert_eq!(record.content, "");
    assert_eq!(record.summary, "");
    assert_eq!(record.source_name, "");
    assert_eq!(record.url, "");
    assert_eq!(record.language, None);
    assert_eq!(record.tone, Tone::Neutral);
}

#[test]
fn map_item_parses_provider_date_format() {
    let item = NewsdataItem {
        pub_date: Some("2024-03-01 10:15:00".to_string()),
        title: Some("Titre".to_string()),
        description: Some("Description".to_string()),
        source_id: Some("lemonde".to_string()),
        link: Some("https://example.com/a".to_string()),
        language: Some("fr".to_string()),
    };
    let record = NewsdataClient::map_item(item);
    assert!(record.published_at.is_some());
    assert_eq!(record.source_name, "lemonde");
    assert_eq!(record.language.as_deref(), Some("fr"));
}

#[test]
fn map_item_treats_empty_language_as_absent() {
    let item = NewsdataItem {
        pub_date: None,
        title: None,
        description: None,
        source_id: None,
        link: None,
        language: Some(String::new()),
    };
    let record = NewsdataClient::map_item(item);
    assert_eq!(record.language, None);
}
