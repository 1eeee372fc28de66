//! Field, custom and multi-selector configurations.

use crate::common::{assert_well_formed, people, Person};
use fastmatch::{FastMatcher, MatcherConfig, MatcherOptions, Selector};
use serde_json::json;
use std::collections::BTreeMap;

fn positions(matcher: &FastMatcher<Person>, prefix: &str) -> Vec<usize> {
    matcher.match_positions(prefix)
}

#[test]
fn test_field_selector() {
    let matcher = FastMatcher::new(&people(), MatcherOptions::new().selector("last"));
    assert_well_formed(&matcher);
    assert_eq!(positions(&matcher, "L"), vec![3, 0]);
    assert_eq!(matcher.get_matches("Hop")[0].first, "Grace");
}

#[test]
fn test_selectors_consulted_in_order() {
    let options = MatcherOptions::new().selectors(["first", "last"]);
    let matcher = FastMatcher::new(&people(), options);
    assert_eq!(matcher.selector_count(), 2);
    assert_eq!(positions(&matcher, "L"), vec![5, 3, 0]);
    assert_eq!(positions(&matcher, "T"), vec![5, 2]);
}

#[test]
fn test_same_record_from_two_selectors_once() {
    let both = vec![Person::new("Lee", "Lee"), Person::new("Ann", "Lowe")];
    let matcher = FastMatcher::new(&both, MatcherOptions::new().selectors(["first", "last"]));
    assert_eq!(positions(&matcher, "L"), vec![0, 1]);
}

#[test]
fn test_custom_selector() {
    let initials = Selector::custom(|p: &Person| {
        let first = p.first.chars().next().unwrap_or(' ');
        let last = p.last.chars().next().unwrap_or(' ');
        format!("{}{}", first, last)
    });
    let matcher = FastMatcher::new(&people(), MatcherOptions::new().selector(initials));
    assert_eq!(positions(&matcher, "A"), vec![0, 2]);
    assert_eq!(positions(&matcher, "GH"), vec![1]);
}

#[test]
fn test_missing_field_yields_empty_key() {
    let matcher = FastMatcher::new(&people(), MatcherOptions::new().selector("middle").limit(2));
    assert_eq!(positions(&matcher, ""), vec![0, 1]);
    assert!(positions(&matcher, "A").is_empty());
}

#[test]
fn test_identity_over_non_text_record() {
    let matcher = FastMatcher::new(&people(), MatcherOptions::new());
    assert!(positions(&matcher, "Ada").is_empty());
    assert_eq!(positions(&matcher, "").len(), people().len());
}

#[test]
fn test_case_insensitive_fields_from_config() {
    let config =
        MatcherConfig::from_json(r#"{ "selector": ["first", "last"], "caseInsensitive": true }"#)
            .unwrap();
    let matcher = FastMatcher::new(&people(), config.into_options());
    assert_eq!(positions(&matcher, "l"), vec![5, 3, 0]);
    assert_eq!(positions(&matcher, "LOVE"), vec![0]);
}

#[test]
fn test_json_records() {
    let records = vec![
        json!({"name": "apple", "id": 42}),
        json!({"name": "apricot", "id": 7}),
        json!({"id": 420}),
        json!("loose"),
    ];

    let by_name = FastMatcher::new(&records, MatcherOptions::new().selector("name"));
    assert_eq!(by_name.match_positions("ap"), vec![0, 1]);

    let by_id = FastMatcher::new(&records, MatcherOptions::new().selector("id"));
    assert_eq!(by_id.match_positions("42"), vec![0, 2]);

    let identity = FastMatcher::new(&records, MatcherOptions::new());
    assert_eq!(identity.get_matches("lo"), vec![&records[3]]);
}

#[test]
fn test_map_records() {
    let records: Vec<BTreeMap<String, String>> = ["kiwi", "kale", "leek"]
        .iter()
        .map(|name| BTreeMap::from([("name".to_string(), name.to_string())]))
        .collect();
    let matcher = FastMatcher::new(&records, MatcherOptions::new().selector("name"));
    assert_eq!(matcher.match_positions("k"), vec![1, 0]);
}

#[test]
fn test_empty_field_name_is_identity() {
    let words = vec!["beta".to_string(), "alpha".to_string()];
    let matcher = FastMatcher::new(&words, MatcherOptions::new().selector(""));
    assert_eq!(matcher.match_positions("a"), vec![1]);
}

#[test]
#[should_panic(expected = "no surname for Grace")]
fn test_panicking_selector_propagates_from_construction() {
    let surname = Selector::custom(|p: &Person| {
        if p.first == "Grace" {
            panic!("no surname for {}", p.first);
        }
        p.last.clone()
    });
    let _ = FastMatcher::new(&people(), MatcherOptions::new().selector(surname));
}
