//! Keyword sentiment: count bullish and bearish words, map the net to a label.

use serde::{Deserialize, Serialize};

use crate::tokenize::tokenize;

pub const POSITIVE_WORDS: &[&str] = &[
    "beat",
    "beats",
    "growth",
    "strong",
    "stronger",
    "surge",
    "surges",
    "record",
    "optimistic",
    "upgrade",
    "upgraded",
    "buy",
    "outperform",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "miss",
    "misses",
    "decline",
    "weak",
    "weaker",
    "plunge",
    "plunges",
    "downgrade",
    "downgraded",
    "sell",
    "underperform",
];

/// Net scores at or beyond this magnitude leave `neutral`.
const LABEL_THRESHOLD: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Bullish,
    Neutral,
    Bearish,
}

impl SentimentLabel {
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        if score >= LABEL_THRESHOLD {
            Self::Bullish
        } else if score <= -LABEL_THRESHOLD {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Neutral => "neutral",
            Self::Bearish => "bearish",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub score: i64,
    pub label: SentimentLabel,
}

impl SentimentResult {
    #[must_use]
    pub fn from_score(score: i64) -> Self {
        Self {
            score,
            label: SentimentLabel::from_score(score),
        }
    }
}

/// Score a batch of texts: +1 per positive word, -1 per negative word.
///
/// Counts are absolute; longer batches are not normalized.
#[must_use]
pub fn sentiment_score<S: AsRef<str>>(texts: &[S]) -> SentimentResult {
    let mut score: i64 = 0;
    for text in texts {
        for token in tokenize(text.as_ref()) {
            if POSITIVE_WORDS.contains(&token.as_str()) {
                score += 1;
            } else if NEGATIVE_WORDS.contains(&token.as_str()) {
                score -= 1;
            }
        }
    }
    SentimentResult::from_score(score)
}
