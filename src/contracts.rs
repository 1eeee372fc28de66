// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for index construction and query output.
//!
//! These are debug-mode assertions. They cost nothing in release builds and
//! fail loudly in tests the moment an invariant breaks, close to the code
//! that broke it.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_list_sorted`          | keys non-decreasing within every list           |
//! | `check_indexes_well_formed`  | positions, offsets and per-record entry counts  |
//! | `check_matches_unique`       | no record twice in one result                   |
//! | `check_matches_within_limit` | `|result| <= limit`                             |

use crate::types::{SelectorIndex, SortedIndexList};

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that a list is sorted by comparison key.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order.
#[inline]
pub fn check_list_sorted(index: &SelectorIndex, list: &SortedIndexList) {
    for i in 1..list.entries.len() {
        let prev = index.key_at(&list.entries[i - 1]);
        let curr = index.key_at(&list.entries[i]);

        debug_assert!(
            prev <= curr,
            "Contract violation: list {} not sorted - entries[{}] ('{}') > entries[{}] ('{}')",
            list.word_offset,
            i - 1,
            prev.chars().take(20).collect::<String>(),
            i,
            curr.chars().take(20).collect::<String>()
        );
    }
}

/// Check every structural invariant of freshly built indexes.
///
/// # Panics (debug builds only)
/// Panics with the first [`InvariantError`](crate::verify::InvariantError).
#[inline]
pub fn check_indexes_well_formed(indexes: &[SelectorIndex], record_count: usize, any_word: bool) {
    if cfg!(debug_assertions) {
        for index in indexes {
            for list in &index.lists {
                check_list_sorted(index, list);
            }
        }

        if let Err(err) = crate::verify::verify_indexes(indexes, record_count, any_word) {
            panic!("Contract violation: {}", err);
        }
    }
}

// ============================================================================
// QUERY CONTRACTS
// ============================================================================

/// Check that no position appears twice in a result.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_matches_unique(positions: &[usize]) {
    if cfg!(debug_assertions) {
        let mut seen = std::collections::HashSet::with_capacity(positions.len());
        for &position in positions {
            debug_assert!(
                seen.insert(position),
                "Contract violation: record {} returned twice",
                position
            );
        }
    }
}

/// Check that a result respects the unique-match limit.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_matches_within_limit(positions: &[usize], limit: usize) {
    debug_assert!(
        positions.len() <= limit,
        "Contract violation: {} matches returned, limit is {}",
        positions.len(),
        limit
    );
}
