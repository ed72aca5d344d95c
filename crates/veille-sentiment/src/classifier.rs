//! The opaque text-classification seam.

use async_trait::async_trait;

use crate::error::ScoringError;

/// A text-classification capability.
///
/// Returns the backend's raw label string (`"positive"`, `"LABEL_0"`, ...)
/// untouched; translating labels into the fixed tone vocabulary is the
/// scorer's job, so backends can be swapped without touching the mapping.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify `text` and return the backend's raw top label.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError`] when the backend cannot produce a label.
    async fn classify(&self, text: &str) -> Result<String, ScoringError>;
}
