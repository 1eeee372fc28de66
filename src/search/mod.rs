// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix lookup over sorted index lists.
//!
//! All keys that start with a prefix form one contiguous run in a sorted
//! list, and the run begins at the first key that is not less than the
//! prefix. So a lookup is a lower-bound binary search followed by a forward
//! walk that stops at the first key that no longer starts with the prefix.
//!
//! The empty prefix is not special: every key starts with `""`, the lower
//! bound is 0, and the walk covers the list until the cap is hit.

pub mod dedup;

use crate::types::{SelectorIndex, SortedIndexList};

/// Literal prefix test under ordinal comparison.
///
/// ```
/// use fastmatch::starts_with;
///
/// assert!(starts_with("foo", "fo"));
/// assert!(starts_with("foo", ""));
/// assert!(!starts_with("", "a"));
/// assert!(!starts_with("foo", "o"));
/// ```
#[inline]
pub fn starts_with(key: &str, prefix: &str) -> bool {
    key.as_bytes().starts_with(prefix.as_bytes())
}

/// Index of the first entry whose key is not less than `prefix`.
///
/// Returns `list.len()` when every key sorts before the prefix.
pub fn lower_bound(index: &SelectorIndex, list: &SortedIndexList, prefix: &str) -> usize {
    list.entries
        .partition_point(|entry| index.key_at(entry) < prefix)
}

/// Append the positions of up to `room` entries whose key starts with
/// `prefix`, in key order. Returns how many were appended.
pub fn scan_prefix(
    index: &SelectorIndex,
    list: &SortedIndexList,
    prefix: &str,
    room: usize,
    out: &mut Vec<usize>,
) -> usize {
    let start = lower_bound(index, list, prefix);

    let mut found = 0;
    for entry in &list.entries[start..] {
        if found == room || !starts_with(index.key_at(entry), prefix) {
            break;
        }
        out.push(entry.position);
        found += 1;
    }
    found
}
