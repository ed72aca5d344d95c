//! Aggregation pipeline for the competitor-news monitor.
//!
//! Fans a brand query out to every configured [`veille_news::NewsSource`],
//! merges the batches, annotates tone and summary, orders by recency, and
//! applies the post-hoc tone filter. A failed source degrades to an empty
//! batch; the pipeline itself never fails.

pub mod monitor;

pub use monitor::Monitor;
