//! Sentiment scoring for article content.
//!
//! The classification capability itself is opaque: anything implementing
//! [`Classifier`] can sit behind the [`SentimentScorer`], which owns
//! truncation, the raw-label → [`veille_core::Tone`] mapping, and the
//! fail-closed contract (any failure scores as neutral). Two classifiers
//! ship with the crate: an offline word-weight lexicon and a client for a
//! remote text-classification inference endpoint.

pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod remote;
pub mod scorer;

pub use classifier::Classifier;
pub use error::ScoringError;
pub use lexicon::LexiconClassifier;
pub use remote::RemoteClassifier;
pub use scorer::SentimentScorer;
