//! Batch orchestration: combine items, summarize, score sentiment.

use serde::{Deserialize, Serialize};
use tickerbrief_core::FeedItem;

use crate::dedupe::dedupe_owned;
use crate::sentiment::{sentiment_score, SentimentResult};
use crate::summarize::{Summarizer, TieBreak};

/// Summary used when there is nothing to summarize.
pub const EMPTY_SUMMARY: &str = "No items found.";

const DEFAULT_MAX_SENTENCES: usize = 3;

/// What the digest hands to rendering and storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub sentiment: SentimentResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestConfig {
    pub max_sentences: usize,
    pub tie_break: TieBreak,
    pub empty_summary: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            max_sentences: DEFAULT_MAX_SENTENCES,
            tie_break: TieBreak::default(),
            empty_summary: EMPTY_SUMMARY.to_string(),
        }
    }
}

/// Deduplicated items together with their summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestOutput {
    pub items: Vec<FeedItem>,
    pub result: SummaryResult,
}

#[derive(Debug, Clone, Default)]
pub struct Digest {
    config: DigestConfig,
}

impl Digest {
    #[must_use]
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DigestConfig {
        &self.config
    }

    /// Summarize and score an already-deduplicated batch.
    ///
    /// The summarizer sees `"<title>. <summary>"` per item while the scorer
    /// sees `"<title> <summary>"`; the extra period only matters for sentence
    /// splitting.
    #[must_use]
    pub fn summarize_items(&self, items: &[FeedItem]) -> SummaryResult {
        let combined = items
            .iter()
            .map(|item| format!("{}. {}", item.title, item.summary))
            .collect::<Vec<_>>()
            .join(" ");

        let summary = if combined.is_empty() {
            self.config.empty_summary.clone()
        } else {
            Summarizer::new()
                .tie_break(self.config.tie_break)
                .summarize(&combined, self.config.max_sentences)
        };

        let texts: Vec<String> = items
            .iter()
            .map(|item| format!("{} {}", item.title, item.summary))
            .collect();
        let sentiment = sentiment_score(&texts);

        tracing::debug!(
            items = items.len(),
            combined_len = combined.len(),
            score = sentiment.score,
            label = %sentiment.label,
            "digest computed"
        );

        SummaryResult { summary, sentiment }
    }

    /// Dedupe raw items, then summarize the survivors.
    #[must_use]
    pub fn run(&self, raw_items: Vec<FeedItem>) -> DigestOutput {
        let raw_count = raw_items.len();
        let items = dedupe_owned(raw_items);
        tracing::debug!(
            raw = raw_count,
            kept = items.len(),
            "deduplicated feed items"
        );
        let result = self.summarize_items(&items);
        DigestOutput { items, result }
    }
}

/// Summarize and score a deduplicated batch with default settings.
#[must_use]
pub fn build_summary_and_sentiment(items: &[FeedItem]) -> SummaryResult {
    Digest::default().summarize_items(items)
}
