//! Extractive summarizer based on word-frequency sentence scoring.
//!
//! # Responsibility
//! - Pick the highest-scoring sentences of a text and return them in
//!   reading order.
//! - Share sentence splitting and word tokenization with the word counter.
//!
//! # Invariants
//! - Frequencies are counted once per call over the whole input.
//! - Output sentences keep their original relative order.
//! - Any input with at least one sentence yields at least one sentence.
//! - Equal scores keep original order (stable sort).

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static SENTENCE_TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence terminator regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word regex"));

/// Tokens with at most this many characters never count toward frequency.
const SHORT_WORD_MAX_CHARS: usize = 3;

/// Slider default in the summarizer UI.
pub const DEFAULT_SUMMARY_PERCENT: u32 = 50;

/// Errors for the UI-facing summarize entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Input is empty or whitespace-only.
    EmptyInput,
    /// Length percent outside `1..=100`.
    InvalidPercent(u32),
}

impl Display for SummaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "text to summarize must not be empty"),
            Self::InvalidPercent(value) => {
                write!(f, "summary length must be within 1..=100 percent, got {value}")
            }
        }
    }
}

impl Error for SummaryError {}

/// Summary plus the counts the UI reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub text: String,
    pub sentence_count: usize,
    pub selected_count: usize,
}

struct ScoredSentence<'a> {
    index: usize,
    text: &'a str,
    score: f64,
}

/// Splits on runs of `.`, `!` and `?`, returning trimmed non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Lowercased word tokens (runs of word characters).
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|token| token.as_str().to_string())
        .collect()
}

/// Counts word occurrences, ignoring tokens of three characters or fewer.
pub fn word_frequencies(text: &str) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();
    for token in tokenize(text) {
        if token.chars().count() > SHORT_WORD_MAX_CHARS {
            *frequencies.entry(token).or_insert(0) += 1;
        }
    }
    frequencies
}

/// Mean frequency of a sentence's tokens; 0 for a sentence without tokens.
pub fn score_sentence(sentence: &str, frequencies: &HashMap<String, usize>) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens
        .iter()
        .map(|token| frequencies.get(token).copied().unwrap_or(0))
        .sum();
    total as f64 / tokens.len() as f64
}

/// Keeps `max(1, floor(sentence_count * ratio))` sentences.
///
/// `ratio` is clamped into `[0, 1]`; NaN and infinities count as 0.
/// Returns an empty string when `text` has no sentences.
pub fn summarize(text: &str, ratio: f64) -> String {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let sentences = split_sentences(text);
    let keep = (sentences.len() as f64 * ratio).floor() as usize;
    select_sentences(text, &sentences, keep)
}

/// UI entry point: validates input and length percent, then summarizes.
///
/// Uses integer arithmetic for the sentence budget so that e.g. 29% of 100
/// sentences keeps exactly 29.
///
/// Non-blank text without any sentence (e.g. `"?!"`) is not an error: it
/// yields an empty summary with `sentence_count` and `selected_count` of 0.
pub fn summarize_request(text: &str, percent: u32) -> Result<Summary, SummaryError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SummaryError::EmptyInput);
    }
    if !(1..=100).contains(&percent) {
        return Err(SummaryError::InvalidPercent(percent));
    }

    let sentences = split_sentences(text);
    let keep = sentences.len() * percent as usize / 100;
    let summary = select_sentences(text, &sentences, keep);

    Ok(Summary {
        text: summary,
        sentence_count: sentences.len(),
        selected_count: keep.max(1).min(sentences.len()),
    })
}

fn select_sentences(text: &str, sentences: &[&str], keep: usize) -> String {
    if sentences.is_empty() {
        return String::new();
    }

    let frequencies = word_frequencies(text);
    let mut scored: Vec<ScoredSentence<'_>> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| ScoredSentence {
            index,
            text: sentence,
            score: score_sentence(sentence, &frequencies),
        })
        .collect();

    // `sort_by` is stable, so ties stay in reading order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(keep.max(1));
    scored.sort_by_key(|sentence| sentence.index);

    scored
        .iter()
        .map(|sentence| format!("{}.", sentence.text))
        .collect::<Vec<_>>()
        .join(" ")
}
