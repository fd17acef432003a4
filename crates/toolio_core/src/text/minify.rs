//! Regex-based HTML/CSS/JS minifier.
//!
//! This is whitespace and comment stripping only. It does not parse the
//! languages, so string literals containing `//` or comment markers are
//! rewritten too.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static HTML_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--[\s\S]*?-->").expect("valid html comment regex"));
static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid block comment regex"));
static LINE_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)//.*$").expect("valid line comment regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
static BETWEEN_TAGS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s+<").expect("valid between-tags regex"));
static CSS_PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{:;,])\s*").expect("valid css punctuation regex"));
static CSS_LAST_SEMICOLON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r";\s*\}").expect("valid css semicolon regex"));
static JS_OPERATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*([=+\-*/%&|^<>?:;,{}()\[\]])\s*").expect("valid js operator regex")
});

/// Source language selected in the minifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Html,
    Css,
    Js,
}

impl CodeKind {
    pub fn parse(value: &str) -> Result<Self, MinifyError> {
        match value.trim() {
            "html" => Ok(Self::Html),
            "css" => Ok(Self::Css),
            "js" => Ok(Self::Js),
            other => Err(MinifyError::UnsupportedKind(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinifyError {
    EmptyInput,
    UnsupportedKind(String),
}

impl Display for MinifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "code to minify must not be empty"),
            Self::UnsupportedKind(value) => write!(f, "unsupported code type `{value}`"),
        }
    }
}

impl Error for MinifyError {}

/// Minified output with size statistics (UTF-8 bytes).
#[derive(Debug, Clone, PartialEq)]
pub struct MinifyReport {
    pub minified: String,
    pub original_bytes: usize,
    pub minified_bytes: usize,
    pub savings_percent: f64,
}

impl MinifyReport {
    /// Savings with one decimal, e.g. `42.5%`.
    pub fn savings_label(&self) -> String {
        format!("{:.1}%", self.savings_percent)
    }
}

/// Minifies trimmed `code` and reports the size change.
pub fn minify(kind: CodeKind, code: &str) -> Result<MinifyReport, MinifyError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(MinifyError::EmptyInput);
    }

    let minified = match kind {
        CodeKind::Html => minify_html(code),
        CodeKind::Css => minify_css(code),
        CodeKind::Js => minify_js(code),
    };
    let original_bytes = code.len();
    let minified_bytes = minified.len();

    Ok(MinifyReport {
        savings_percent: (1.0 - minified_bytes as f64 / original_bytes as f64) * 100.0,
        minified,
        original_bytes,
        minified_bytes,
    })
}

pub fn minify_html(code: &str) -> String {
    let code = HTML_COMMENT_RE.replace_all(code, "");
    let code = WHITESPACE_RE.replace_all(&code, " ");
    let code = BETWEEN_TAGS_RE.replace_all(&code, "><");
    code.trim().to_string()
}

pub fn minify_css(code: &str) -> String {
    let code = BLOCK_COMMENT_RE.replace_all(code, "");
    let code = WHITESPACE_RE.replace_all(&code, " ");
    let code = CSS_PUNCTUATION_RE.replace_all(&code, "$1");
    let code = CSS_LAST_SEMICOLON_RE.replace_all(&code, "}");
    code.trim().to_string()
}

pub fn minify_js(code: &str) -> String {
    let code = LINE_COMMENT_RE.replace_all(code, "");
    let code = BLOCK_COMMENT_RE.replace_all(&code, "");
    let code = WHITESPACE_RE.replace_all(&code, " ");
    let code = JS_OPERATOR_RE.replace_all(&code, "$1");
    code.trim().to_string()
}

/// Byte size as `B`, `KB` or `MB` with two decimals above one kilobyte.
pub fn format_byte_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    if bytes < 1024 * 1024 {
        return format!("{:.2} KB", bytes as f64 / KIB);
    }
    format!("{:.2} MB", bytes as f64 / (KIB * KIB))
}
