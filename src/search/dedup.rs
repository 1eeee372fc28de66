// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merging per-list scans into one deduplicated match sequence.
//!
//! A record can show up in several lists: once per selector, and once per
//! word tail in any-word mode. Those hits are the same match, so results are
//! deduplicated by record position and nothing else. The first occurrence
//! wins, which keeps the earliest list and the smallest key.
//!
//! Because duplicates are only removed after scanning, a fixed raw cap would
//! starve later lists: with limit 3, if list 0 yields `[x, y]` and list 1
//! yields `[x, y, z]`, a raw cap of three leaves list 1 a single slot, spent
//! on the duplicate `x`, and `z` is never reached.
//! The cap therefore grows by the number of candidates each list appends,
//! which is exactly the worst-case overlap that list can introduce.
//!
//! **Invariant**: Each record appears at most once in the merged output.

use super::scan_prefix;
use crate::types::SelectorIndex;
use std::collections::HashSet;

/// Position-only deduplication with a cap on unique matches.
#[derive(Debug, Default, Clone)]
pub struct MatchMerger {
    seen: HashSet<usize>,
    positions: Vec<usize>,
    limit: usize,
}

impl MatchMerger {
    pub fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(limit),
            positions: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Forget all merged positions and set a new cap. Keeps allocations.
    pub fn reset(&mut self, limit: usize) {
        self.seen.clear();
        self.positions.clear();
        self.limit = limit;
    }

    /// Merge one position. Returns `true` if it was new and fit under the cap.
    pub fn merge(&mut self, position: usize) -> bool {
        if self.is_full() || !self.seen.insert(position) {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Merge positions in order until the cap is reached.
    pub fn merge_all(&mut self, positions: impl IntoIterator<Item = usize>) {
        for position in positions {
            if self.is_full() {
                break;
            }
            self.merge(position);
        }
    }

    pub fn is_full(&self) -> bool {
        self.positions.len() >= self.limit
    }

    /// Unique positions in first-seen order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

/// Per-query working memory: raw candidates plus the merger.
///
/// Owned by the caller so repeated queries can reuse the allocations.
#[derive(Debug, Default, Clone)]
pub struct QueryScratch {
    pub items: Vec<usize>,
    pub merger: MatchMerger,
}

impl QueryScratch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unique positions produced by the last [`collect_matches`] call.
    pub fn positions(&self) -> &[usize] {
        self.merger.positions()
    }
}

/// Run a prefix query across every list and leave the unique matching
/// positions in `scratch`.
///
/// Lists are visited selector-major, then in ascending word offset. With
/// `preserve_order` the raw candidates are sorted by position before
/// deduplication; otherwise they keep list-then-key order, and the walk ends
/// as soon as `limit` unique positions are known, since later lists can only
/// append after them.
pub fn collect_matches(
    indexes: &[SelectorIndex],
    prefix: &str,
    limit: usize,
    preserve_order: bool,
    scratch: &mut QueryScratch,
) {
    scratch.items.clear();
    scratch.merger.reset(limit);

    let mut cap = limit;
    let mut merged = 0;

    'lists: for index in indexes {
        for list in &index.lists {
            if scratch.items.len() >= cap || scratch.merger.is_full() {
                break 'lists;
            }

            let room = cap - scratch.items.len();
            let found = scan_prefix(index, list, prefix, room, &mut scratch.items);

            // Adaptive limit: the next list may repeat every record this one
            // produced, so it gets that much extra headroom.
            cap += found;

            if !preserve_order {
                scratch.merger.merge_all(scratch.items[merged..].iter().copied());
                merged = scratch.items.len();
            }
        }
    }

    if preserve_order {
        scratch.items.sort();
        scratch.merger.merge_all(scratch.items.iter().copied());
    }
}
