//! Static tool catalog, search and category filtering.
//!
//! # Invariants
//! - Catalog order is display order; every query result keeps it.
//! - Tool ids are unique and double as page slugs (`tools/{id}.html`).
//! - Queries shorter than `MIN_QUERY_CHARS` never produce matches.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Search input is ignored until it has at least this many characters.
pub const MIN_QUERY_CHARS: usize = 2;

static TOOL_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tools/(.+)\.html").expect("valid tool path regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Text,
    Generator,
    Image,
    Converter,
    Productivity,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 5] = [
        Self::Text,
        Self::Generator,
        Self::Image,
        Self::Converter,
        Self::Productivity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Generator => "generator",
            Self::Image => "image",
            Self::Converter => "converter",
            Self::Productivity => "productivity",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim())
    }
}

impl Display for ToolCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category link selection; `all` shows every tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(ToolCategory),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let value = value.trim();
        if value == "all" {
            return Ok(Self::All);
        }
        ToolCategory::parse(value)
            .map(Self::Only)
            .ok_or_else(|| CatalogError::UnknownCategory(value.to_string()))
    }

    pub fn matches(self, category: ToolCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    UnknownCategory(String),
    UnknownTool(String),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCategory(value) => write!(f, "unknown tool category `{value}`"),
            Self::UnknownTool(value) => write!(f, "unknown tool `{value}`"),
        }
    }
}

impl Error for CatalogError {}

/// Text the search box matches against; worded separately from the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTerms {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// One tool card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    pub id: &'static str,
    pub category: ToolCategory,
    /// Font Awesome class list.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub search: SearchTerms,
}

impl ToolEntry {
    pub fn page_path(&self) -> String {
        tool_page_path(self.id)
    }

    /// `query` must already be lowercased.
    fn matches_query(&self, query: &str) -> bool {
        self.search.title.to_lowercase().contains(query)
            || self.search.description.to_lowercase().contains(query)
            || self
                .search
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(query))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query under `MIN_QUERY_CHARS`; the results dropdown stays hidden.
    TooShort,
    /// Matching tools in catalog order; may be empty ("No tools found").
    Matches(Vec<&'static ToolEntry>),
}

impl SearchOutcome {
    pub fn matches(&self) -> &[&'static ToolEntry] {
        match self {
            Self::TooShort => &[],
            Self::Matches(found) => found,
        }
    }
}

macro_rules! tool {
    (
        $id:literal, $category:ident, $icon:literal,
        card: $title:literal, $description:literal, [$($tag:literal),*],
        search: $search_title:literal, $search_description:literal, [$($search_tag:literal),*]
    ) => {
        ToolEntry {
            id: $id,
            category: ToolCategory::$category,
            icon: $icon,
            title: $title,
            description: $description,
            tags: &[$($tag),*],
            search: SearchTerms {
                title: $search_title,
                description: $search_description,
                tags: &[$($search_tag),*],
            },
        }
    };
}

static TOOLS: [ToolEntry; 15] = [
    tool!("text-summarizer", Text, "fas fa-file-contract",
        card: "Text Summarizer", "Summarize long texts into key points quickly.", ["AI", "Summary", "Text"],
        search: "Text Summarizer", "Summarize long texts into key points", ["text", "ai", "summary"]),
    tool!("grammar-checker", Text, "fas fa-spell-check",
        card: "Grammar Checker", "Check grammar and spelling errors instantly.", ["Grammar", "Spell", "Text"],
        search: "Grammar & Spell Checker", "Check grammar and spelling errors", ["text", "grammar", "spell"]),
    tool!("text-rewriter", Text, "fas fa-edit",
        card: "Text Rewriter", "Rewrite text while preserving the original meaning.", ["Rewrite", "Paraphrase", "Text"],
        search: "Text Rewriter/Paraphraser", "Rewrite text while preserving meaning", ["text", "rewrite", "paraphrase"]),
    tool!("password-generator", Generator, "fas fa-key",
        card: "Password Generator", "Generate secure random passwords with options.", ["Security", "Password", "Generator"],
        search: "Password Generator", "Generate secure random passwords", ["security", "password", "generator"]),
    tool!("qr-code-generator", Generator, "fas fa-qrcode",
        card: "QR Code Generator", "Create QR codes for URLs, text, and more.", ["QR Code", "Generator", "Share"],
        search: "QR Code Generator", "Create QR codes from text or URLs", ["qr", "code", "generator"]),
    tool!("image-compressor", Image, "fas fa-compress-alt",
        card: "Image Compressor", "Compress images without losing quality.", ["Image", "Compress", "Optimize"],
        search: "Image Compressor", "Compress images without quality loss", ["image", "compress", "optimize"]),
    tool!("pdf-merger", Converter, "fas fa-file-pdf",
        card: "PDF Merger", "Merge multiple PDF files into one document.", ["PDF", "Merge", "Document"],
        search: "PDF Merger", "Merge multiple PDF files into one", ["pdf", "merge", "document"]),
    tool!("unit-converter", Converter, "fas fa-balance-scale",
        card: "Unit Converter", "Convert between different units of measurement.", ["Units", "Convert", "Measurement"],
        search: "Unit Converter", "Convert between different units", ["convert", "units", "measurement"]),
    tool!("word-counter", Text, "fas fa-font",
        card: "Word Counter", "Count words, characters, sentences, and more.", ["Counter", "Analyze", "Text"],
        search: "Word & Character Counter", "Count words, characters, and sentences", ["text", "counter", "analyze"]),
    tool!("base64-converter", Converter, "fas fa-code",
        card: "Base64 Converter", "Encode and decode Base64 strings easily.", ["Base64", "Encode", "Decode"],
        search: "Base64 Encoder/Decoder", "Encode and decode Base64 strings", ["base64", "encode", "decode"]),
    tool!("color-picker", Generator, "fas fa-palette",
        card: "Color Picker", "Pick colors and generate beautiful palettes.", ["Color", "Picker", "Design"],
        search: "Color Picker & Generator", "Pick colors and generate palettes", ["color", "picker", "palette"]),
    tool!("image-to-base64", Converter, "fas fa-image",
        card: "Image to Base64", "Convert images to Base64 data URLs.", ["Image", "Base64", "Convert"],
        search: "Image to Base64", "Convert images to Base64 strings", ["image", "base64", "convert"]),
    tool!("name-generator", Generator, "fas fa-users",
        card: "Name Generator", "Generate random names for projects and characters.", ["Name", "Generator", "Random"],
        search: "Random Name Generator", "Generate random names for projects", ["name", "generator", "random"]),
    tool!("code-minifier", Text, "fas fa-file-code",
        card: "Code Minifier", "Minify HTML, CSS, and JavaScript code.", ["Code", "Minify", "Optimize"],
        search: "Code Minifier", "Minify HTML, CSS, and JavaScript code", ["code", "minify", "optimize"]),
    tool!("todo-list", Productivity, "fas fa-tasks",
        card: "Todo List", "Manage your tasks with local storage.", ["Todo", "Tasks", "Productivity"],
        search: "Todo List", "Manage tasks with local storage", ["todo", "tasks", "productivity"]),
];

/// Every tool in display order.
pub fn all_tools() -> &'static [ToolEntry] {
    &TOOLS
}

pub fn find_tool(id: &str) -> Result<&'static ToolEntry, CatalogError> {
    TOOLS
        .iter()
        .find(|tool| tool.id == id)
        .ok_or_else(|| CatalogError::UnknownTool(id.to_string()))
}

/// Case-insensitive substring search over title, description and tags.
pub fn search_tools(query: &str) -> SearchOutcome {
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::TooShort;
    }
    SearchOutcome::Matches(
        TOOLS
            .iter()
            .filter(|tool| tool.matches_query(&query))
            .collect(),
    )
}

pub fn filter_by_category(filter: CategoryFilter) -> Vec<&'static ToolEntry> {
    TOOLS
        .iter()
        .filter(|tool| filter.matches(tool.category))
        .collect()
}

/// Relative page path for a tool id.
pub fn tool_page_path(id: &str) -> String {
    format!("tools/{id}.html")
}

/// Tool id embedded in a page path, e.g. `/site/tools/todo-list.html`.
pub fn tool_id_from_path(path: &str) -> Option<&str> {
    TOOL_PATH_RE
        .captures(path)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

#[cfg(test)]
mod tests {
    use super::{all_tools, ToolCategory};
    use std::collections::HashSet;

    #[test]
    fn tool_ids_are_unique() {
        let ids: HashSet<_> = all_tools().iter().map(|tool| tool.id).collect();
        assert_eq!(ids.len(), all_tools().len());
    }

    #[test]
    fn every_category_has_a_tool() {
        for category in ToolCategory::ALL {
            assert!(all_tools().iter().any(|tool| tool.category == category));
        }
    }
}
