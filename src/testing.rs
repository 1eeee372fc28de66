// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::index::word_tails;

/// Syllables for generated words. Short and overlapping, so generated
/// corpora share lots of prefixes.
const SYLLABLES: &[&str] = &[
    "an", "ar", "be", "ca", "de", "el", "en", "fa", "ga", "in", "lo", "ma", "ne", "or", "pa",
    "qu", "re", "sa", "te", "un",
];

/// Reproducible word list: the same `seed` always yields the same words.
pub fn generate_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let syllables = rng.gen_range(1..=4usize);
            (0..syllables)
                .map(|_| SYLLABLES[rng.gen_range(0..SYLLABLES.len())])
                .collect::<String>()
        })
        .collect()
}

/// Deterministic multi-word phrases built from [`generate_words`].
pub fn generate_phrases(count: usize, max_words: usize, seed: u64) -> Vec<String> {
    let words = generate_words(count * max_words.max(1), seed);
    words
        .chunks(max_words.max(1))
        .enumerate()
        .map(|(i, chunk)| chunk[..1 + i % chunk.len()].join(" "))
        .collect()
}

/// Brute-force reference for a prefix query.
///
/// `key_sets[s][p]` is the comparison key selector `s` produced for record
/// `p`, already case-folded if the matcher folds. No sorted lists, no
/// binary search: every candidate list is rebuilt by filtering and sorting
/// `(key, position)` pairs.
///
/// Without `preserve_order` the answer is the first `limit` distinct
/// positions of all matches, list by list. With it, each list contributes
/// its first `limit` matches, and the distinct union is taken in position
/// order.
pub fn oracle_positions(
    key_sets: &[Vec<String>],
    prefix: &str,
    any_word: bool,
    limit: usize,
    preserve_order: bool,
) -> Vec<usize> {
    let mut candidates: Vec<usize> = Vec::new();

    for keys in key_sets {
        let depth = if any_word {
            keys.iter().map(|key| word_tails(key).len()).max().unwrap_or(0)
        } else {
            1
        };

        for word in 0..depth {
            let mut hits: Vec<(&str, usize)> = keys
                .iter()
                .enumerate()
                .filter_map(|(position, key)| {
                    let tail = if any_word {
                        *word_tails(key).get(word)?
                    } else {
                        key.as_str()
                    };
                    tail.starts_with(prefix).then_some((tail, position))
                })
                .collect();
            hits.sort();

            let take = if preserve_order { limit } else { hits.len() };
            candidates.extend(hits.into_iter().take(take).map(|(_, position)| position));
        }
    }

    if preserve_order {
        candidates.sort();
    }

    let mut out = Vec::new();
    for position in candidates {
        if out.len() == limit {
            break;
        }
        if !out.contains(&position) {
            out.push(position);
        }
    }
    out
}
