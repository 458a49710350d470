use super::*;

#[test]
fn with_words_normalizes_and_dedups() {
    let book = WordBook::with_words(["  Python ", "python", "IDE", "", "   "]);
    let words: Vec<&str> = book.accepted.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["ide", "python"]);
    assert!(book.submissions.is_empty());
}

#[test]
fn seeded_book_is_lowercase_and_trimmed() {
    let book = WordBook::seeded();
    assert!(!book.accepted.is_empty());
    for word in &book.accepted {
        assert_eq!(word, &word.trim().to_lowercase(), "seed word not normalized: {word:?}");
    }
}

#[test]
fn seeded_book_contains_mixed_case_seeds_lowercased() {
    let book = WordBook::seeded();
    assert!(book.contains("python"));
    assert!(book.contains("ide"));
    assert!(book.contains("none"));
    assert!(book.contains("standard library"));
    assert!(!book.contains("Python"));
}

#[test]
fn seeded_book_collapses_duplicate_seed() {
    let book = WordBook::seeded();
    let appends = book.accepted.iter().filter(|w| *w == "append").count();
    assert_eq!(appends, 1);
}

#[test]
fn default_book_is_empty() {
    let book = WordBook::default();
    assert!(book.accepted.is_empty());
    assert!(book.submissions.is_empty());
}

#[test]
fn submission_record_serializes_absent_name_as_null() {
    let rec = SubmissionRecord { word: "loop".into(), participant_name: None, is_correct: true };
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json, serde_json::json!({"word": "loop", "participant_name": null, "is_correct": true}));
}

#[tokio::test]
async fn app_state_clones_share_book() {
    let state = test_helpers::app_state_with_words(&["alpha"]);
    let other = state.clone();
    other.book.write().await.accepted.insert("beta".into());
    assert!(state.book.read().await.contains("beta"));
}
