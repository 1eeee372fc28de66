//! Differential testing against `fastmatch::testing::oracle_positions`.

use fastmatch::testing::oracle_positions;
use fastmatch::{fold_case, FastMatcher, MatcherOptions, Record, Selector};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a tiny alphabet, so prefixes collide often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{1,3}").unwrap()
}

/// Keys of one to four words with varied separators.
fn key_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(word_strategy(), 1..5),
        prop::sample::select(vec![" ", "  ", "\t"]),
        prop::bool::ANY,
    )
        .prop_map(|(words, sep, lead)| {
            let joined = words.join(sep);
            if lead {
                format!(" {}", joined)
            } else {
                joined
            }
        })
}

fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB ]{0,3}").unwrap()
}

/// A record with two independent keys and no text of its own.
#[derive(Clone, Debug)]
struct Pair(String, String);

impl Record for Pair {}

fn pair_strategy() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec(
        (key_strategy(), key_strategy()).prop_map(|(a, b)| Pair(a, b)),
        0..25,
    )
}

fn fold_all(keys: Vec<String>, case_insensitive: bool) -> Vec<String> {
    if case_insensitive {
        keys.iter().map(|key| fold_case(key)).collect()
    } else {
        keys
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Single identity selector, every flag combination.
    #[test]
    fn prop_identity_matches_oracle(
        keys in prop::collection::vec(key_strategy(), 0..30),
        prefix in prefix_strategy(),
        limit in 1usize..8,
        case_insensitive in any::<bool>(),
        any_word in any::<bool>(),
        preserve_order in any::<bool>(),
    ) {
        let options = MatcherOptions::new()
            .limit(limit)
            .case_insensitive(case_insensitive)
            .any_word(any_word)
            .preserve_order(preserve_order);
        let matcher = FastMatcher::new(&keys, options);

        let query = if case_insensitive { fold_case(&prefix) } else { prefix.clone() };
        let expected = oracle_positions(
            &[fold_all(keys.clone(), case_insensitive)],
            &query,
            any_word,
            limit,
            preserve_order,
        );

        prop_assert_eq!(matcher.match_positions(&prefix), expected);
    }

    /// Two custom selectors over pair records.
    #[test]
    fn prop_two_selectors_match_oracle(
        pairs in pair_strategy(),
        prefix in prefix_strategy(),
        limit in 1usize..8,
        any_word in any::<bool>(),
        preserve_order in any::<bool>(),
    ) {
        let options = MatcherOptions::new()
            .selector(Selector::custom(|p: &Pair| p.0.clone()))
            .selector(Selector::custom(|p: &Pair| p.1.clone()))
            .limit(limit)
            .any_word(any_word)
            .preserve_order(preserve_order);
        let matcher = FastMatcher::new(&pairs, options);

        let firsts: Vec<String> = pairs.iter().map(|p| p.0.clone()).collect();
        let seconds: Vec<String> = pairs.iter().map(|p| p.1.clone()).collect();
        let expected = oracle_positions(&[firsts, seconds], &prefix, any_word, limit, preserve_order);

        prop_assert_eq!(matcher.match_positions(&prefix), expected);
    }

    /// Generated phrase corpora with the default limit.
    #[test]
    fn prop_generated_phrases_match_oracle(
        seed in 1u64..10_000,
        prefix in prop::string::string_regex("[a-z]{0,2}").unwrap(),
        preserve_order in any::<bool>(),
    ) {
        let phrases = fastmatch::testing::generate_phrases(200, 3, seed);
        let options = MatcherOptions::new().any_word(true).preserve_order(preserve_order);
        let matcher = FastMatcher::new(&phrases, options);

        let expected = oracle_positions(
            &[phrases.clone()],
            &prefix,
            true,
            fastmatch::DEFAULT_LIMIT,
            preserve_order,
        );
        prop_assert_eq!(matcher.match_positions(&prefix), expected);
    }
}
