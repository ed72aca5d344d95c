//! Adapter for the Newsdata.io news search API.
//!
//! Wraps `reqwest` with key management and defensive decoding of the
//! `results` array. Field mapping: `pubDate` → `published_at`, `title` →
//! `title`, `description` → `content`, `source_id` → `source_name`, `link` →
//! `url`, `language` → `language`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use veille_core::{normalize, ArticleRecord, Tone};

use crate::error::SourceError;
use crate::source::NewsSource;

const DEFAULT_BASE_URL: &str = "https://newsdata.io/api/1/news";

/// Client for the Newsdata.io `/news` endpoint.
///
/// Use [`NewsdataClient::new`] for production or
/// [`NewsdataClient::with_base_url`] to point at a mock server in tests.
pub struct NewsdataClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

#[derive(Debug, Deserialize)]
struct NewsdataResponse {
    #[serde(default)]
    results: Vec<NewsdataItem>,
}

/// One raw entry. Every field decodes lossily: missing, null, or
/// wrong-typed values become `None` and must never fail the batch.
#[derive(Debug, Deserialize)]
struct NewsdataItem {
    #[serde(rename = "pubDate", default, deserialize_with = "crate::fields::lossy_string")]
    pub_date: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    source_id: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "crate::fields::lossy_string")]
    language: Option<String>,
}

impl NewsdataClient {
    /// Creates a new client pointed at the production Newsdata API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
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
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    ///
    /// Always requests page 1; deeper pagination is out of scope.
    fn build_url(&self, query: &str, language: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("q", query);
            if let Some(lang) = language {
                pairs.append_pair("language", lang);
            }
            pairs.append_pair("page", "1");
        }
        url
    }

    fn map_item(item: NewsdataItem) -> ArticleRecord {
        ArticleRecord {
            published_at: normalize::parse_published_at(&item.pub_date.unwrap_or_default()),
            title: item.title.unwrap_or_default(),
            content: item.description.unwrap_or_default(),
            summary: String::new(),
            source_name: item.source_id.unwrap_or_default(),
            url: item.link.unwrap_or_default(),
            language: item.language.filter(|l| !l.is_empty()),
            tone: Tone::Neutral,
        }
    }
}

#[async_trait]
impl NewsSource for NewsdataClient {
    fn name(&self) -> &'static str {
        "newsdata"
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
        let parsed: NewsdataResponse =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        tracing::debug!(
            query,
            returned = parsed.results.len(),
            max_results,
            "newsdata response decoded"
        );

        // The provider's own result count is not trusted to honor any limit.
        Ok(parsed
            .results
            .into_iter()
            .take(max_results)
            .map(Self::map_item)
            .collect())
    }
}

#[cfg(test)]
#[path = "newsdata_test.rs"]
mod tests;
