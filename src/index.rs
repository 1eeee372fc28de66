// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **LIST_SORTED**: every list is sorted by comparison key, ordinal order
//! 2. **LIST_STABLE**: equal keys keep ascending record position
//! 3. **ENTRY_WELLFORMED**: `position < records.len()` and `offset` starts a word tail
//! 4. **RECORD_PRESENT**: every record has an entry in its selector's first list
//!
//! In any-word mode a key is split into "tails", the suffixes that start
//! right after each whitespace run. List `j` indexes tail `j` of every
//! record that has one, so a record keyed "of the night" sits in lists 0, 1
//! and 2 under "of the night", "the night" and "night".

use crate::selector::{fold_case, KeyFn};
use crate::types::{IndexEntry, SelectorIndex, SortedIndexList};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Byte offsets at which each word tail of `key` starts.
///
/// Leading whitespace is skipped, so the first offset is where the trimmed
/// key begins. Every later offset follows a whitespace run. Trailing
/// whitespace opens no tail. The result is never empty: a blank key has
/// one (empty) tail.
pub fn word_tail_offsets(key: &str) -> Vec<usize> {
    let start = key.len() - key.trim_start().len();
    let mut offsets = vec![start];

    let mut after_space = false;
    for (i, c) in key[start..].char_indices() {
        if c.is_whitespace() {
            after_space = true;
        } else if after_space {
            offsets.push(start + i);
            after_space = false;
        }
    }

    offsets
}

/// The word tails of `key` as string slices.
///
/// ```
/// use fastmatch::word_tails;
///
/// assert_eq!(word_tails("of the night"), vec!["of the night", "the night", "night"]);
/// ```
pub fn word_tails(key: &str) -> Vec<&str> {
    word_tail_offsets(key)
        .into_iter()
        .map(|offset| &key[offset..])
        .collect()
}

/// Check that a list is sorted by comparison key.
pub fn is_list_sorted(index: &SelectorIndex, list: &SortedIndexList) -> bool {
    list.entries
        .windows(2)
        .all(|pair| index.key_at(&pair[0]) <= index.key_at(&pair[1]))
}

/// Build every list for one selector.
///
/// Keys are computed once per record, folded when `case_insensitive` is
/// set, and kept in the returned index; list entries point into them.
pub fn build_selector_index<T>(
    records: &[T],
    key_fn: &KeyFn<T>,
    any_word: bool,
    case_insensitive: bool,
) -> SelectorIndex {
    let keys: Vec<String> = records
        .iter()
        .map(|record| {
            let key = key_fn(record);
            if case_insensitive {
                fold_case(&key)
            } else {
                key
            }
        })
        .collect();

    let lists = if any_word {
        build_word_lists(&keys)
    } else {
        let entries = (0..keys.len())
            .map(|position| IndexEntry {
                position,
                offset: 0,
            })
            .collect();
        vec![sorted_list(&keys, 0, entries)]
    };

    SelectorIndex { keys, lists }
}

/// Build the index for every resolved selector, in selector order.
pub fn build_index<T>(
    records: &[T],
    key_fns: &[KeyFn<T>],
    any_word: bool,
    case_insensitive: bool,
) -> Vec<SelectorIndex> {
    let indexes: Vec<SelectorIndex> = key_fns
        .iter()
        .map(|key_fn| build_selector_index(records, key_fn, any_word, case_insensitive))
        .collect();

    tracing::debug!(
        records = records.len(),
        selectors = indexes.len(),
        lists = indexes.iter().map(|index| index.lists.len()).sum::<usize>(),
        entries = indexes.iter().map(SelectorIndex::entry_count).sum::<usize>(),
        any_word,
        case_insensitive,
        "built prefix index"
    );

    indexes
}

fn build_word_lists(keys: &[String]) -> Vec<SortedIndexList> {
    let mut buckets: Vec<Vec<IndexEntry>> = Vec::new();

    for (position, key) in keys.iter().enumerate() {
        for (word_offset, offset) in word_tail_offsets(key).into_iter().enumerate() {
            if buckets.len() <= word_offset {
                buckets.push(Vec::new());
            }
            buckets[word_offset].push(IndexEntry { position, offset });
        }
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(word_offset, entries)| sorted_list(keys, word_offset, entries))
        .collect()
}

fn sorted_list(keys: &[String], word_offset: usize, mut entries: Vec<IndexEntry>) -> SortedIndexList {
    let key_of = |entry: &IndexEntry| &keys[entry.position][entry.offset..];

    // INVARIANT: LIST_SORTED + LIST_STABLE
    // Entries arrive in ascending position, so a stable sort on the key alone
    // leaves equal keys in input order. Both sorts below are stable.
    #[cfg(feature = "parallel")]
    {
        entries.par_sort_by(|a, b| key_of(a).cmp(key_of(b)));
    }
    #[cfg(not(feature = "parallel"))]
    {
        entries.sort_by(|a, b| key_of(a).cmp(key_of(b)));
    }

    SortedIndexList {
        word_offset,
        entries,
    }
}
