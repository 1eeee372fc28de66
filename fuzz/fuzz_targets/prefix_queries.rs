// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matcher construction and prefix queries.
//!
//! Arbitrary keys (control characters, odd whitespace, multi-byte text) and
//! arbitrary option combinations. The matcher must never panic, its index
//! must verify, and every answer must agree with the brute-force oracle.

#![no_main]

use arbitrary::Arbitrary;
use fastmatch::testing::oracle_positions;
use fastmatch::{fold_case, verify_matcher, FastMatcher, MatcherOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    keys: Vec<String>,
    prefixes: Vec<String>,
    limit: u8,
    case_insensitive: bool,
    any_word: bool,
    preserve_order: bool,
}

fuzz_target!(|input: Input| {
    let options = MatcherOptions::new()
        .limit(input.limit as usize)
        .case_insensitive(input.case_insensitive)
        .any_word(input.any_word)
        .preserve_order(input.preserve_order);
    let matcher = FastMatcher::new(&input.keys, options);

    if let Err(err) = verify_matcher(&matcher) {
        panic!("invariant violated: {}", err);
    }

    let folded: Vec<String> = if input.case_insensitive {
        input.keys.iter().map(|key| fold_case(key)).collect()
    } else {
        input.keys.clone()
    };

    for prefix in &input.prefixes {
        let query = if input.case_insensitive {
            fold_case(prefix)
        } else {
            prefix.clone()
        };
        let expected = oracle_positions(
            std::slice::from_ref(&folded),
            &query,
            input.any_word,
            matcher.limit(),
            input.preserve_order,
        );
        assert_eq!(matcher.match_positions(prefix), expected, "prefix {:?}", prefix);
    }
});
