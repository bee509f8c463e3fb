//! Multi-source collection.

use futures::stream::{self, StreamExt};
use tickerbrief_core::{FeedItem, FeedSource};

use crate::client::FeedClient;

/// Items gathered from every source, plus one message per failed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub items: Vec<FeedItem>,
    /// `"<source name>: <error>"` for each source that could not be read.
    pub errors: Vec<String>,
}

/// Fetch all `sources`, at most `max_concurrent` at a time.
///
/// Items are returned grouped in source order regardless of which request
/// finished first. A failing source is logged and recorded in
/// [`Collection::errors`]; it never aborts the others.
pub async fn collect_items(
    client: &FeedClient,
    sources: &[FeedSource],
    max_concurrent: usize,
) -> Collection {
    let results: Vec<_> = stream::iter(sources.iter().cloned())
        .map(|source| async move {
            let result = client.fetch_items(&source).await;
            (source, result)
        })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let mut collection = Collection::default();
    for (source, result) in results {
        match result {
            Ok(items) => {
                tracing::debug!(
                    source = %source.name,
                    count = items.len(),
                    "collected feed items"
                );
                collection.items.extend(items);
            }
            Err(e) => {
                tracing::warn!(
                    source = %source.name,
                    url = %source.url,
                    error = %e,
                    "feed fetch failed"
                );
                collection.errors.push(format!("{}: {e}", source.name));
            }
        }
    }

    tracing::info!(
        sources = sources.len(),
        items = collection.items.len(),
        failed = collection.errors.len(),
        "feed collection complete"
    );
    collection
}
