use toolio_core::text::summarizer::{split_sentences, DEFAULT_SUMMARY_PERCENT};
use toolio_core::{summarize, summarize_request, SummaryError};

const PETS: &str = "Cats are great. Dogs are great too. Fish are quiet.";

#[test]
fn picks_highest_scoring_sentence() {
    assert_eq!(summarize(PETS, 0.34), "Cats are great.");
}

#[test]
fn keeps_original_order_of_selected_sentences() {
    assert_eq!(summarize(PETS, 0.67), "Cats are great. Dogs are great too.");

    let text = "Quiet intro line. Rust makes systems programming pleasant. \
                Systems programming with Rust is pleasant and safe. Goodbye.";
    let summary = summarize(text, 0.5);
    let picked = split_sentences(&summary);
    let original = split_sentences(text);
    let positions: Vec<_> = picked
        .iter()
        .map(|sentence| original.iter().position(|o| o == sentence).unwrap())
        .collect();
    assert_eq!(picked.len(), 2);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn full_ratio_returns_every_sentence_with_periods() {
    let text = "One thing happened! Another thing followed?  Finally it ended";
    assert_eq!(
        summarize(text, 1.0),
        "One thing happened. Another thing followed. Finally it ended."
    );
}

#[test]
fn ratio_edge_values_still_keep_one_sentence() {
    for ratio in [0.0, -3.0, f64::NAN, f64::NEG_INFINITY] {
        assert_eq!(split_sentences(&summarize(PETS, ratio)).len(), 1);
    }
    assert_eq!(summarize(PETS, 7.5), summarize(PETS, 1.0));
}

#[test]
fn single_sentence_gets_a_period() {
    assert_eq!(summarize("just one sentence here", 0.5), "just one sentence here.");
}

#[test]
fn short_words_only_fall_back_to_reading_order() {
    assert_eq!(summarize("I am. He is. We go.", 0.67), "I am. He is.");
}

#[test]
fn empty_text_summarizes_to_empty_string() {
    assert_eq!(summarize("", 0.5), "");
    assert_eq!(summarize(" ... !? ", 0.5), "");
}

#[test]
fn request_validates_input_and_percent() {
    assert_eq!(
        summarize_request("   ", DEFAULT_SUMMARY_PERCENT),
        Err(SummaryError::EmptyInput)
    );
    assert_eq!(
        summarize_request(PETS, 0),
        Err(SummaryError::InvalidPercent(0))
    );
    assert_eq!(
        summarize_request(PETS, 101),
        Err(SummaryError::InvalidPercent(101))
    );
}

#[test]
fn request_reports_counts() {
    let summary = summarize_request(PETS, 34).unwrap();
    assert_eq!(summary.text, "Cats are great.");
    assert_eq!(summary.sentence_count, 3);
    assert_eq!(summary.selected_count, 1);

    let summary = summarize_request(PETS, 100).unwrap();
    assert_eq!(summary.selected_count, 3);
}

#[test]
fn request_with_only_terminators_yields_empty_summary() {
    let summary = summarize_request("?!", DEFAULT_SUMMARY_PERCENT).unwrap();
    assert_eq!(summary.text, "");
    assert_eq!(summary.sentence_count, 0);
    assert_eq!(summary.selected_count, 0);
}
