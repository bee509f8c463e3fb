use std::collections::HashSet;

use tickerbrief_core::FeedItem;

/// Drop items whose identity key was already seen, keeping first-seen order.
///
/// The key is the link, or the title when the link is empty. Items with
/// neither collapse into a single retained item.
#[must_use]
pub fn dedupe(items: &[FeedItem]) -> Vec<FeedItem> {
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.identity_key()))
        .cloned()
        .collect()
}

/// Owning variant of [`dedupe`] that avoids cloning retained items.
#[must_use]
pub fn dedupe_owned(mut items: Vec<FeedItem>) -> Vec<FeedItem> {
    let mut seen: HashSet<String> = HashSet::new();
    items.retain(|item| seen.insert(item.identity_key().to_owned()));
    items
}
