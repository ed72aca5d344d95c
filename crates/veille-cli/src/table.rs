//! Plain-text table rendering for the watch output.

use veille_core::ArticleRecord;

const TITLE_WIDTH: usize = 40;
const SUMMARY_WIDTH: usize = 60;

/// Render records as a fixed-column table, one line per article, in the
/// order the pipeline produced them.
pub fn render(records: &[ArticleRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16}  {:<TITLE_WIDTH$}  {:<8}  {:<SUMMARY_WIDTH$}  {:<16}  {:<4}  link\n",
        "date", "title", "tone", "summary", "source", "lang"
    ));

    for record in records {
        let date = record
            .published_at
            .map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string());
        let language = record.language.as_deref().unwrap_or("-");
        out.push_str(&format!(
            "{:<16}  {:<TITLE_WIDTH$}  {:<8}  {:<SUMMARY_WIDTH$}  {:<16}  {:<4}  {}\n",
            date,
            clip(&record.title, TITLE_WIDTH),
            record.tone.to_string(),
            clip(&record.summary, SUMMARY_WIDTH),
            clip(&record.source_name, 16),
            language,
            record.url
        ));
    }

    out
}

/// Clip to `width` characters, replacing the tail with `…` when clipped.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{head}…")
}
