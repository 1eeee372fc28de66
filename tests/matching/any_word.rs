//! Word-start matching.

use crate::common::{query, string_matcher, strings};
use fastmatch::MatcherOptions;

fn any_word() -> MatcherOptions<String> {
    MatcherOptions::new().any_word(true)
}

#[test]
fn test_lists_processed_word_offset_major() {
    let matcher = string_matcher(&["a", "a b", "a c", "b", "c a b"], any_word());
    assert_eq!(query(&matcher, "b"), strings(&["b", "a b", "c a b"]));
}

#[test]
fn test_preserve_order_sorts_by_position() {
    let matcher = string_matcher(
        &["a", "a b", "a c", "b", "c a b"],
        any_word().preserve_order(true),
    );
    assert_eq!(query(&matcher, "b"), strings(&["a b", "b", "c a b"]));
}

#[test]
fn test_matches_word_starts_only() {
    let matcher = string_matcher(&["of the night", "other"], any_word());
    assert_eq!(query(&matcher, "ni"), strings(&["of the night"]));
    assert_eq!(query(&matcher, "the n"), strings(&["of the night"]));
    assert!(query(&matcher, "he").is_empty());
    assert!(query(&matcher, "ight").is_empty());
}

#[test]
fn test_leading_whitespace_trimmed() {
    let matcher = string_matcher(&["  apple pie"], any_word());
    assert_eq!(query(&matcher, "apple"), strings(&["  apple pie"]));
    assert_eq!(query(&matcher, "pie"), strings(&["  apple pie"]));

    let whole_key = string_matcher(&["  apple pie"], MatcherOptions::new());
    assert!(query(&whole_key, "apple").is_empty());
}

#[test]
fn test_whitespace_runs_and_tabs() {
    let matcher = string_matcher(&["a   b", "c\td", "e\nf"], any_word());
    assert_eq!(query(&matcher, "b"), strings(&["a   b"]));
    assert_eq!(query(&matcher, "d"), strings(&["c\td"]));
    assert_eq!(query(&matcher, "f"), strings(&["e\nf"]));
}

#[test]
fn test_record_reported_once() {
    let matcher = string_matcher(&["b b b", "a"], any_word());
    assert_eq!(query(&matcher, "b"), strings(&["b b b"]));
    assert_eq!(query(&matcher, ""), strings(&["a", "b b b"]));
}

#[test]
fn test_trailing_whitespace_adds_no_tail() {
    let matcher = string_matcher(&["a ", "b"], any_word());
    assert_eq!(matcher.list_count(), 1);
    assert_eq!(query(&matcher, ""), strings(&["a ", "b"]));
}

#[test]
fn test_duplicate_hits_do_not_starve_later_lists() {
    // "a a" fills one slot from the first list, then shows up again in the
    // second; the next distinct record must still be reached
    let matcher = string_matcher(&["a a", "b a", "c a"], any_word().limit(2));
    assert_eq!(query(&matcher, "a"), strings(&["a a", "b a"]));

    let ordered = string_matcher(&["a a", "b a", "c a"], any_word().limit(2).preserve_order(true));
    assert_eq!(query(&ordered, "a"), strings(&["a a", "b a"]));
}

#[test]
fn test_list_count_is_max_word_count() {
    let matcher = string_matcher(&["one", "one two three", "one two"], any_word());
    assert_eq!(matcher.list_count(), 3);
    assert_eq!(matcher.entry_count(), 6);
}

#[test]
fn test_case_insensitive_words() {
    let matcher = string_matcher(
        &["New York", "new jersey", "York"],
        any_word().case_insensitive(true),
    );
    assert_eq!(query(&matcher, "york"), strings(&["York", "New York"]));
    assert_eq!(query(&matcher, "NEW"), strings(&["new jersey", "New York"]));
}

#[test]
fn test_lists_expose_word_tails_in_key_order() {
    let matcher = string_matcher(&["a", "a b", "a c", "b", "c a b"], any_word());
    let tails: Vec<Vec<&str>> = matcher
        .lists()
        .map(|(index, list)| list.entries.iter().map(|entry| index.key_at(entry)).collect())
        .collect();

    assert_eq!(
        tails,
        vec![
            vec!["a", "a b", "a c", "b", "c a b"],
            vec!["a b", "b", "c"],
            vec!["b"],
        ]
    );
}
