use toolio_core::search::catalog::{
    all_tools, filter_by_category, find_tool, tool_id_from_path, tool_page_path, CatalogError,
    CategoryFilter,
};
use toolio_core::{search_tools, SearchOutcome, ToolCategory};

fn ids(outcome: &SearchOutcome) -> Vec<&'static str> {
    outcome.matches().iter().map(|tool| tool.id).collect()
}

#[test]
fn catalog_lists_fifteen_tools_in_display_order() {
    let tools = all_tools();
    assert_eq!(tools.len(), 15);
    assert_eq!(tools[0].id, "text-summarizer");
    assert_eq!(tools[14].id, "todo-list");
}

#[test]
fn short_queries_do_not_search() {
    assert_eq!(search_tools(""), SearchOutcome::TooShort);
    assert_eq!(search_tools("  q "), SearchOutcome::TooShort);
    assert!(search_tools("qr").matches().len() == 1);
}

#[test]
fn search_matches_title_description_and_tags_case_insensitively() {
    assert_eq!(ids(&search_tools("BASE64")), vec!["base64-converter", "image-to-base64"]);
    assert_eq!(ids(&search_tools("paraphrase")), vec!["text-rewriter"]);
    assert_eq!(ids(&search_tools("local storage")), vec!["todo-list"]);
}

#[test]
fn search_keeps_catalog_order_and_reports_no_matches() {
    assert_eq!(
        ids(&search_tools("image")),
        vec!["image-compressor", "image-to-base64"]
    );
    assert_eq!(search_tools("spreadsheet"), SearchOutcome::Matches(Vec::new()));
}

#[test]
fn category_filter_selects_matching_cards() {
    assert_eq!(filter_by_category(CategoryFilter::All).len(), 15);

    let image: Vec<_> = filter_by_category(CategoryFilter::Only(ToolCategory::Image))
        .iter()
        .map(|tool| tool.id)
        .collect();
    assert_eq!(image, vec!["image-compressor"]);

    assert_eq!(
        filter_by_category(CategoryFilter::parse("converter").unwrap()).len(),
        4
    );
    assert_eq!(
        CategoryFilter::parse("audio"),
        Err(CatalogError::UnknownCategory("audio".to_string()))
    );
}

#[test]
fn page_paths_round_trip() {
    let path = tool_page_path("word-counter");
    assert_eq!(path, "tools/word-counter.html");
    assert_eq!(tool_id_from_path(&format!("/site/{path}")), Some("word-counter"));
    assert_eq!(tool_id_from_path("/index.html"), None);

    assert_eq!(find_tool("qr-code-generator").unwrap().page_path(), "tools/qr-code-generator.html");
    assert!(find_tool("missing").is_err());
}
