//! The article record and the fixed enums attached to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized article, regardless of which provider it came from.
///
/// Every adapter maps its provider response into this shape before anything
/// else touches the data; provider-specific fields do not survive the
/// mapping. `summary` and `tone` are derived by the pipeline and are always
/// set after annotation, even when scoring fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Publication timestamp. `None` when the provider value was missing or
    /// unparseable; such records sort after all dated ones.
    pub published_at: Option<DateTime<Utc>>,
    /// Headline. May be empty.
    pub title: String,
    /// Article body or description as supplied by the provider. May be empty.
    pub content: String,
    /// First 200 characters of `content` plus an ellipsis marker, or `""`
    /// when `content` is empty. Derived, never independently edited.
    pub summary: String,
    /// Publisher identifier.
    pub source_name: String,
    /// Link to the original article.
    pub url: String,
    /// Article language code when the provider reports one.
    pub language: Option<String>,
    /// Sentiment classification. Defaults to [`Tone::Neutral`].
    pub tone: Tone,
}

/// The three-class sentiment vocabulary.
///
/// Raw classifier labels are mapped into this enum at the scorer boundary;
/// model-internal label strings never appear on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Positive => write!(f, "positive"),
            Tone::Neutral => write!(f, "neutral"),
            Tone::Negative => write!(f, "negative"),
        }
    }
}

/// Post-hoc tone filter applied by the pipeline after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneFilter {
    All,
    Positive,
    Neutral,
    Negative,
}

impl ToneFilter {
    /// Whether a record with the given tone passes this filter.
    #[must_use]
    pub fn matches(self, tone: Tone) -> bool {
        match self {
            ToneFilter::All => true,
            ToneFilter::Positive => tone == Tone::Positive,
            ToneFilter::Neutral => tone == Tone::Neutral,
            ToneFilter::Negative => tone == Tone::Negative,
        }
    }
}

/// Query language selection. `All` is the wildcard and omits the language
/// parameter from provider requests entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    All,
    Fr,
    En,
    Es,
}

impl Language {
    /// The ISO 639-1 code sent to providers, or `None` for the wildcard.
    #[must_use]
    pub fn code(self) -> Option<&'static str> {
        match self {
            Language::All => None,
            Language::Fr => Some("fr"),
            Language::En => Some("en"),
            Language::Es => Some("es"),
        }
    }
}
