use tickerbrief_core::FeedItem;
use tickerbrief_digest::normalize_text;

use crate::parse::FeedEntry;

/// Turn parsed entries into [`FeedItem`]s tagged with `source_name`.
///
/// Title, summary and published date are whitespace-normalized; the link is
/// only trimmed. Entries with neither a title nor a summary are dropped.
#[must_use]
pub fn extract_items(entries: Vec<FeedEntry>, source_name: &str) -> Vec<FeedItem> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let title = normalize_text(&entry.title);
            let summary = normalize_text(&entry.summary);
            if title.is_empty() && summary.is_empty() {
                return None;
            }
            Some(FeedItem {
                source: source_name.to_string(),
                title,
                link: entry.link.trim().to_string(),
                summary,
                published: normalize_text(&entry.published),
            })
        })
        .collect()
}
