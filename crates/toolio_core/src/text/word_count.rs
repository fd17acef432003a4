//! Word, character, sentence and paragraph statistics.

use crate::text::summarizer::{split_sentences, tokenize};

/// Average reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_minutes: usize,
}

impl TextStats {
    /// `"N minute"` / `"N minutes"` as shown next to the counters.
    pub fn reading_time_label(&self) -> String {
        let unit = if self.reading_minutes == 1 {
            "minute"
        } else {
            "minutes"
        };
        format!("{} {unit}", self.reading_minutes)
    }
}

/// Counts over the trimmed input. Sentences split like the summarizer does.
///
/// Character counts are UTF-16 code units, the length a browser text field
/// reports; an emoji outside the BMP counts as two.
pub fn count_text(text: &str) -> TextStats {
    let text = text.trim();
    let words = tokenize(text).len();

    TextStats {
        words,
        characters: utf16_len(text.chars()),
        characters_no_spaces: utf16_len(text.chars().filter(|c| !c.is_whitespace())),
        sentences: split_sentences(text).len(),
        paragraphs: text
            .split('\n')
            .filter(|paragraph| !paragraph.trim().is_empty())
            .count(),
        reading_minutes: words.div_ceil(WORDS_PER_MINUTE),
    }
}

fn utf16_len(chars: impl Iterator<Item = char>) -> usize {
    chars.map(char::len_utf16).sum()
}
