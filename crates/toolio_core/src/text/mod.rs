//! Text tools: summarizer, word counter, code minifier.

pub mod minify;
pub mod summarizer;
pub mod word_count;
