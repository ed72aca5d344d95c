use thiserror::Error;

/// Errors produced by a classifier backend.
///
/// The scorer maps every one of these to a neutral tone; they exist so the
/// recovery is explicit and logged rather than a blanket suppression.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// The remote classification endpoint failed (request, status, or body).
    #[error("classification endpoint error: {0}")]
    Endpoint(String),

    /// The backend returned no label for the input.
    #[error("classifier returned no label")]
    EmptyResponse,
}
