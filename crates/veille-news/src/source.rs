//! The adapter seam between providers and the pipeline.

use async_trait::async_trait;
use veille_core::ArticleRecord;

use crate::error::SourceError;

/// A news provider the pipeline can query.
///
/// Implementations construct a provider-specific request, decode the
/// response defensively, and return records already normalized into
/// [`ArticleRecord`]. The result list is truncated to `max_results`
/// client-side regardless of what the provider claims to return.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Search the provider for articles mentioning `query`.
    ///
    /// `language` is an ISO 639-1 code; `None` omits the provider's language
    /// filter entirely.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] on transport failure, non-2xx status, or an
    /// undecodable body. Never fails on missing or malformed article fields.
    async fn fetch(
        &self,
        query: &str,
        max_results: usize,
        language: Option<&str>,
    ) -> Result<Vec<ArticleRecord>, SourceError>;
}
