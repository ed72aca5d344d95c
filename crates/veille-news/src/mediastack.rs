//! Adapter for the Mediastack news API.
//!
//! Same contract as [`crate::newsdata`], different wire shape: the auth
//! parameter is `access_key`, the query parameter is `keywords`, the language
//! filter is `languages`, and articles live under the `data` root. Field
//! mapping: `published_at` → `published_at`, `title` → `title`,
//! `description` → `content`, `source` → `source_name`, `url` → `url`.
//! Mediastack reports no per-article language.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use veille_core::{normalize, ArticleRecord, Tone};

use crate::error::SourceError;
use crate::source::NewsSource;

const DEFAULT_BASE_URL: &str = "http://api.mediastack.com/v1/news";

/// Client for the Mediastack `/v1/news` endpoint.
pub struct MediastackClient {
    client: Client,
    access_key: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct MediastackResponse {
    #[serde(default)]
    data: Vec<MediastackItem>,
}

#[derive(Debug, Deserialize)]
struct MediastackItem {
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    published_at: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    source: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    url: Option<String>,
}

impl MediastackClient {
    /// Creates a new client pointed at the production Mediastack API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(access_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        Self::with_base_url(access_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        access_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| SourceError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            access_key: access_key.to_owned(),
            base_url,
        })
    }

    fn build_url(&self, query: &str, language: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_key", &self.access_key);
            pairs.append_pair("keywords", query);
            if let Some(lang) = language {
                pairs.append_pair("languages", lang);
            }
        }
        url
    }

    fn map_item(item: MediastackItem) -> ArticleRecord {
        ArticleRecord {
            published_at: normalize::parse_published_at(&item.published_at.unwrap_or_default()),
            title: item.title.unwrap_or_default(),
            content: item.description.unwrap_or_default(),
            summary: String::new(),
            source_name: item.source.unwrap_or_default(),
            url: item.url.unwrap_or_default(),
            language: None,
            tone: Tone::Neutral,
        }
    }
}

#[async_trait]
impl NewsSource for MediastackClient {
    fn name(&self) -> &'static str {
        "mediastack"
    }

    async fn fetch(
        &self,
        query: &str,
        max_results: usize,
        language: Option<&str>,
    ) -> Result<Vec<ArticleRecord>, SourceError> {
        let url = self.build_url(query, language);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: MediastackResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        tracing::debug!(
            query,
            returned = parsed.data.len(),
            max_results,
            "mediastack response decoded"
        );

        Ok(parsed
            .data
            .into_iter()
            .take(max_results)
            .map(Self::map_item)
            .collect())
    }
}

#[cfg(test)]
#[path = "mediastack_test.rs"]
mod tests;
