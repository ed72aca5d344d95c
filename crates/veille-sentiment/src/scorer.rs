//! The scorer: truncation, label mapping, and the fail-closed contract.

use veille_core::Tone;

use crate::classifier::Classifier;

/// Maximum number of characters handed to the classifier.
const CLASSIFY_MAX_CHARS: usize = 512;

/// Raw backend labels → fixed tone vocabulary.
///
/// Covers the plain-word labels and the `LABEL_n` codes emitted by the
/// common three-class sentiment models. Matched case-insensitively; anything
/// not listed here scores as neutral.
const LABEL_MAP: &[(&str, Tone)] = &[
    ("positive", Tone::Positive),
    ("label_2", Tone::Positive),
    ("neutral", Tone::Neutral),
    ("label_1", Tone::Neutral),
    ("negative", Tone::Negative),
    ("label_0", Tone::Negative),
];

/// Sentiment scorer over an injected classification backend.
///
/// Constructed once at the composition root and shared by reference for the
/// life of the process; `score` takes `&self` and holds no mutable state.
pub struct SentimentScorer {
    classifier: Box<dyn Classifier>,
}

impl SentimentScorer {
    #[must_use]
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Score article content into a tone. Never fails.
    ///
    /// Empty or whitespace-only content is neutral without a classifier
    /// call. Otherwise the first 512 characters are classified and the raw
    /// label mapped through [`LABEL_MAP`]; classifier errors and unknown
    /// labels both fall back to neutral with a warning.
    pub async fn score(&self, content: &str) -> Tone {
        if content.trim().is_empty() {
            return Tone::Neutral;
        }

        let truncated: String = content.chars().take(CLASSIFY_MAX_CHARS).collect();

        let raw_label = match self.classifier.classify(&truncated).await {
            Ok(label) => label,
            Err(e) => {
                tracing::warn!(error = %e, "classification failed, defaulting to neutral");
                return Tone::Neutral;
            }
        };

        match map_label(&raw_label) {
            Some(tone) => tone,
            None => {
                tracing::warn!(label = %raw_label, "unrecognized classifier label, defaulting to neutral");
                Tone::Neutral
            }
        }
    }
}

fn map_label(raw: &str) -> Option<Tone> {
    let needle = raw.trim().to_lowercase();
    for &(label, tone) in LABEL_MAP {
        if needle == label {
            return Some(tone);
        }
    }
    None
}
