//! Pipeline orchestration.

use std::cmp::Ordering;
use std::sync::Arc;

use veille_core::{summarize, ArticleRecord, Language, ToneFilter};
use veille_news::NewsSource;
use veille_sentiment::SentimentScorer;

/// The aggregation pipeline over a set of sources and one shared scorer.
///
/// Sources are queried in the order they were configured; that order is also
/// the tie-break for records with equal timestamps. The scorer is shared by
/// `Arc` from the composition root — constructed once per process, read-only
/// afterwards.
pub struct Monitor {
    sources: Vec<Box<dyn NewsSource>>,
    scorer: Arc<SentimentScorer>,
}

impl Monitor {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn NewsSource>>, scorer: Arc<SentimentScorer>) -> Self {
        Self { sources, scorer }
    }

    /// Run one monitoring query. Infallible by design.
    ///
    /// 1. Fetch from every source sequentially; a source error is logged and
    ///    replaced by an empty batch, never surfaced to the caller.
    /// 2. Concatenate in source order, no cross-source dedup — the same
    ///    article from two providers appears twice.
    /// 3. Annotate every record with tone and summary.
    /// 4. Stable-sort most recent first; records without a usable timestamp
    ///    sort after all dated ones.
    /// 5. Apply the tone filter (after sorting; filtering never reorders).
    pub async fn run(
        &self,
        brand: &str,
        language: Language,
        max_per_source: usize,
        filter: ToneFilter,
    ) -> Vec<ArticleRecord> {
        let mut records = Vec::new();

        for source in &self.sources {
            match source.fetch(brand, max_per_source, language.code()).await {
                Ok(batch) => {
                    tracing::debug!(
                        source = source.name(),
                        brand,
                        count = batch.len(),
                        "collected articles"
                    );
                    records.extend(batch);
                }
                Err(e) => {
                    tracing::warn!(
                        source = source.name(),
                        brand,
                        error = %e,
                        "source fetch failed, continuing with remaining sources"
                    );
                }
            }
        }

        if records.is_empty() {
            tracing::info!(brand, "no articles found");
            return records;
        }

        for record in &mut records {
            record.tone = self.scorer.score(&record.content).await;
            record.summary = summarize(&record.content);
        }

        sort_by_recency(&mut records);

        if filter != ToneFilter::All {
            records.retain(|r| filter.matches(r.tone));
        }

        records
    }
}

/// Stable descending sort on `published_at`, `None` after every `Some`.
///
/// Ties (including two `None`s) keep their input order.
fn sort_by_recency(records: &mut [ArticleRecord]) {
    records.sort_by(|a, b| match (a.published_at, b.published_at) {
        (Some(ta), Some(tb)) => tb.cmp(&ta),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
#[path = "monitor_test.rs"]
mod tests;
