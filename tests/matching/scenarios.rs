//! Core prefix matching behavior with default and single-flag options.

use crate::common::{query, string_matcher, strings};
use fastmatch::{FastMatcher, MatcherOptions, DEFAULT_LIMIT};

#[test]
fn test_prefix_in_sorted_key_order() {
    let matcher = string_matcher(&["aa", "ab", "ba", "bb"], MatcherOptions::new());
    assert_eq!(query(&matcher, "a"), strings(&["aa", "ab"]));
    assert_eq!(query(&matcher, "b"), strings(&["ba", "bb"]));
}

#[test]
fn test_results_follow_key_order_not_input_order() {
    let matcher = string_matcher(&["b", "ab", "aa"], MatcherOptions::new());
    assert_eq!(query(&matcher, "a"), strings(&["aa", "ab"]));
}

#[test]
fn test_case_insensitive_returns_original_records() {
    let matcher = string_matcher(
        &["aa", "ba", "AB", "BB"],
        MatcherOptions::new().case_insensitive(true),
    );
    assert_eq!(query(&matcher, "a"), strings(&["aa", "AB"]));
    assert_eq!(query(&matcher, "A"), strings(&["aa", "AB"]));
}

#[test]
fn test_case_sensitive_by_default() {
    let matcher = string_matcher(&["aa", "ba", "AB", "BB"], MatcherOptions::new());
    assert_eq!(query(&matcher, "a"), strings(&["aa"]));
    assert_eq!(query(&matcher, "A"), strings(&["AB"]));
}

#[test]
fn test_preserve_order_keeps_input_order() {
    let matcher = string_matcher(
        &["ac", "ab", "b", "aa"],
        MatcherOptions::new().preserve_order(true),
    );
    assert_eq!(query(&matcher, "a"), strings(&["ac", "ab", "aa"]));
}

#[test]
fn test_no_match() {
    let matcher = string_matcher(&["apple", "banana"], MatcherOptions::new());
    assert!(query(&matcher, "z").is_empty());
    assert!(query(&matcher, "applesauce").is_empty());
}

#[test]
fn test_empty_prefix_returns_first_keys() {
    let matcher = string_matcher(&["c", "a", "b"], MatcherOptions::new());
    assert_eq!(query(&matcher, ""), strings(&["a", "b", "c"]));
}

#[test]
fn test_limit_truncates() {
    let words: Vec<String> = (0..10).map(|i| format!("a{}", i)).collect();
    let matcher = FastMatcher::from_vec(words, MatcherOptions::new().limit(3));
    assert_eq!(query(&matcher, "a"), strings(&["a0", "a1", "a2"]));
}

#[test]
fn test_default_limit() {
    let words: Vec<String> = (0..100).map(|i| format!("w{:03}", i)).collect();
    let matcher = FastMatcher::from_vec(words, MatcherOptions::new());
    assert_eq!(matcher.limit(), DEFAULT_LIMIT);
    assert_eq!(matcher.get_matches("w").len(), DEFAULT_LIMIT);
}

#[test]
fn test_zero_limit_uses_default() {
    let words: Vec<String> = (0..40).map(|i| format!("w{:02}", i)).collect();
    let matcher = FastMatcher::from_vec(words, MatcherOptions::new().limit(0));
    assert_eq!(matcher.get_matches("w").len(), DEFAULT_LIMIT);
}

#[test]
fn test_duplicate_records_are_distinct_positions() {
    let matcher = string_matcher(&["same", "same", "other"], MatcherOptions::new());
    assert_eq!(matcher.match_positions("s"), vec![0, 1]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let matcher = string_matcher(
        &["été", "etat", "Été"],
        MatcherOptions::new().case_insensitive(true),
    );
    assert_eq!(matcher.match_positions("é"), vec![0, 2]);
    assert_eq!(query(&matcher, "É"), strings(&["été", "Été"]));
}

#[test]
fn test_prefix_is_literal() {
    let matcher = string_matcher(&["a.b", "axb", "a*"], MatcherOptions::new());
    assert_eq!(query(&matcher, "a."), strings(&["a.b"]));
    assert_eq!(query(&matcher, "a*"), strings(&["a*"]));
}

#[test]
fn test_input_not_mutated() {
    let list = strings(&["b", "a", "c"]);
    let before = list.clone();
    let matcher = FastMatcher::new(&list, MatcherOptions::new());
    assert_eq!(list, before);
    assert_eq!(matcher.records(), &before[..]);
}

#[test]
fn test_empty_collection() {
    let matcher = string_matcher(&[], MatcherOptions::new().any_word(true));
    assert!(matcher.is_empty());
    assert_eq!(matcher.list_count(), 0);
    assert!(query(&matcher, "").is_empty());
}

#[test]
fn test_case_insensitive_over_borrowed_records() {
    let owned = strings(&["Apple", "apricot", "Banana", "APEX"]);
    let borrowed: Vec<&String> = owned.iter().collect();

    let matcher = FastMatcher::new(&borrowed, MatcherOptions::new().case_insensitive(true));
    let found: Vec<&str> = matcher
        .get_matches("AP")
        .into_iter()
        .map(|record| record.as_str())
        .collect();

    assert_eq!(found, ["APEX", "Apple", "apricot"]);
    assert!(std::ptr::eq(*matcher.get_matches("b")[0], &owned[2]));
}
