//! Offline word-weight lexicon classifier.
//!
//! The default backend when no remote endpoint is configured. Scores text by
//! summing per-word weights from an automotive-news lexicon, clamps to
//! `[-1.0, 1.0]`, and thresholds the sum into the three raw labels.

use async_trait::async_trait;

use crate::classifier::Classifier;
use crate::error::ScoringError;

/// Automotive-news word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("award", 0.5),
    ("best", 0.5),
    ("breakthrough", 0.4),
    ("efficient", 0.3),
    ("excellent", 0.5),
    ("gain", 0.3),
    ("good", 0.3),
    ("great", 0.4),
    ("growth", 0.3),
    ("impressive", 0.4),
    ("innovative", 0.4),
    ("launch", 0.2),
    ("leader", 0.3),
    ("popular", 0.3),
    ("praise", 0.4),
    ("profit", 0.4),
    ("quality", 0.3),
    ("record", 0.3),
    ("reliable", 0.4),
    ("success", 0.4),
    ("win", 0.4),
    // Negative signals
    ("accident", -0.5),
    ("bad", -0.4),
    ("bankruptcy", -0.7),
    ("crash", -0.5),
    ("crisis", -0.5),
    ("decline", -0.4),
    ("defect", -0.6),
    ("delay", -0.3),
    ("emissions", -0.3),
    ("failed", -0.4),
    ("failure", -0.4),
    ("fine", -0.3),
    ("fire", -0.5),
    ("fraud", -0.7),
    ("investigation", -0.4),
    ("lawsuit", -0.5),
    ("layoffs", -0.5),
    ("loss", -0.4),
    ("problem", -0.3),
    ("recall", -0.7),
    ("scandal", -0.6),
    ("strike", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
];

/// Sums beyond this magnitude leave the neutral band.
const NEUTRAL_BAND: f32 = 0.05;

/// Lexicon-backed classifier. Cheap to construct and stateless.
#[derive(Debug, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// Score a text string against the lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps the
/// result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub(crate) fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase();
        for &(lex_word, weight) in LEXICON {
            if w == lex_word {
                score += weight;
                break;
            }
        }
    }
    score.clamp(-1.0, 1.0)
}

#[async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<String, ScoringError> {
        let score = lexicon_score(text);
        let label = if score > NEUTRAL_BAND {
            "positive"
        } else if score < -NEUTRAL_BAND {
            "negative"
        } else {
            "neutral"
        };
        Ok(label.to_string())
    }
}
