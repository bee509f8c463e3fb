//! Frequency-based extractive summarizer.
//!
//! Sentences are scored by summing the whole-text frequency of each of their
//! tokens, and the top scorers are returned verbatim in score order.

use std::cmp::Reverse;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::trim_space;
use crate::tokenize::{token_frequencies, tokenize};

static BOUNDARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.!?][\s\x1C-\x1F]+").expect("valid sentence boundary regex")
});

/// Splits a body of text into sentences.
pub trait SentenceSplitter {
    /// Return the sentences of `text` as slices of it, in order.
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Breaks after `.`, `!` or `?` when followed by whitespace (including
/// U+001C..=U+001F).
///
/// Abbreviations, decimals and quoted punctuation are not special-cased. The
/// piece after the last boundary is always returned, even when empty, so
/// `"One. Two. "` yields three sentences.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSplitter;

impl SentenceSplitter for PunctuationSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in BOUNDARY_RE.find_iter(text) {
            // Terminators are single-byte ASCII; keep them with the sentence.
            let end = boundary.start() + 1;
            sentences.push(&text[start..end]);
            start = boundary.end();
        }
        sentences.push(&text[start..]);
        sentences
    }
}

/// Ordering among sentences with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lexicographically later sentence text first.
    #[default]
    TextDescending,
    /// Earlier sentences first.
    ArticleOrder,
}

#[derive(Debug, Clone, Default)]
pub struct Summarizer<S = PunctuationSplitter> {
    splitter: S,
    tie_break: TieBreak,
}

impl Summarizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SentenceSplitter> Summarizer<S> {
    #[must_use]
    pub fn with_splitter(splitter: S) -> Self {
        Self {
            splitter,
            tie_break: TieBreak::default(),
        }
    }

    #[must_use]
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Pick up to `max_sentences` sentences of `text`.
    ///
    /// Text with no more than `max_sentences` sentences comes back trimmed
    /// and otherwise unchanged. Longer text is reduced to its highest-scoring
    /// sentences joined by single spaces, ordered by score rather than by
    /// position in the text.
    #[must_use]
    pub fn summarize(&self, text: &str, max_sentences: usize) -> String {
        let sentences = self.splitter.split(text);
        if sentences.len() <= max_sentences {
            return trim_space(text).to_string();
        }

        let freq = token_frequencies(text);
        let mut scored: Vec<(usize, &str)> = sentences
            .into_iter()
            .map(|sentence| {
                let score = tokenize(sentence)
                    .iter()
                    .map(|token| freq.get(token).copied().unwrap_or(0))
                    .sum();
                (score, sentence)
            })
            .collect();

        match self.tie_break {
            TieBreak::TextDescending => scored.sort_by(|a, b| b.cmp(a)),
            TieBreak::ArticleOrder => scored.sort_by_key(|&(score, _)| Reverse(score)),
        }

        scored
            .into_iter()
            .take(max_sentences)
            .map(|(_, sentence)| trim_space(sentence))
            .filter(|sentence| !sentence.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Summarize with the default splitter and tie-break.
#[must_use]
pub fn summarize_text(text: &str, max_sentences: usize) -> String {
    Summarizer::new().summarize(text, max_sentences)
}
