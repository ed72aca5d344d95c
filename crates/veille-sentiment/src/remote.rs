//! Client for a remote text-classification inference endpoint.
//!
//! Speaks the common inference-server shape: POST `{"inputs": text}`, read
//! back a ranked label list. Both response layouts seen in the wild are
//! accepted: `[[{"label": ..., "score": ...}, ...]]` and the flat
//! `[{"label": ..., "score": ...}, ...]`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::ScoringError;

/// HTTP classifier backend.
pub struct RemoteClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    #[serde(default)]
    score: f32,
}

impl RemoteClassifier {
    /// Create a new client for the given endpoint base URL.
    #[must_use]
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: endpoint_url.trim_end_matches('/').to_string(),
        }
    }

    /// Pick the highest-scoring label from a ranked list.
    fn top_label(mut ranked: Vec<LabelScore>) -> Result<String, ScoringError> {
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
            .into_iter()
            .next()
            .map(|ls| ls.label)
            .ok_or(ScoringError::EmptyResponse)
    }
}

#[async_trait]
impl Classifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> Result<String, ScoringError> {
        let request = ClassifyRequest { inputs: text };
        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ScoringError::Endpoint(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ScoringError::Endpoint(format!(
                "endpoint returned status {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ScoringError::Endpoint(format!("response parse error: {e}")))?;

        // Nested form first, then the flat form.
        if let Ok(nested) = serde_json::from_value::<Vec<Vec<LabelScore>>>(body.clone()) {
            let ranked = nested.into_iter().next().ok_or(ScoringError::EmptyResponse)?;
            return Self::top_label(ranked);
        }

        let flat = serde_json::from_value::<Vec<LabelScore>>(body)
            .map_err(|e| ScoringError::Endpoint(format!("unrecognized response shape: {e}")))?;
        Self::top_label(flat)
    }
}
