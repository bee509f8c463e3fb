//! Dedupe, extractive summary, and keyword sentiment over a batch of feed items.
//!
//! Everything here is synchronous and total: any string input produces a
//! well-defined output. Collaborators call [`dedupe`] on the raw items and
//! then [`build_summary_and_sentiment`] (or [`Digest`] for non-default
//! settings) on the result.

pub mod dedupe;
pub mod normalize;
pub mod pipeline;
pub mod sentiment;
pub mod summarize;
pub mod tokenize;

pub use dedupe::{dedupe, dedupe_owned};
pub use normalize::normalize_text;
pub use pipeline::{
    build_summary_and_sentiment, Digest, DigestConfig, DigestOutput, SummaryResult,
    EMPTY_SUMMARY,
};
pub use sentiment::{sentiment_score, SentimentLabel, SentimentResult};
pub use summarize::{summarize_text, PunctuationSplitter, SentenceSplitter, Summarizer, TieBreak};
pub use tokenize::{token_frequencies, tokenize, STOPWORDS};
