// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural verification of a built matcher.
//!
//! The debug contracts in [`crate::contracts`] panic on the first broken
//! invariant and vanish in release builds. This module checks the same
//! properties, plus completeness, and reports the first failure as an
//! [`InvariantError`] so tools can run it on demand.

mod types;

pub use types::*;

use crate::index::word_tail_offsets;
use crate::matcher::FastMatcher;
use crate::types::SelectorIndex;

/// Verify every index of a matcher.
pub fn verify_matcher<T>(matcher: &FastMatcher<T>) -> Result<VerificationReport, InvariantError> {
    verify_indexes(matcher.indexes(), matcher.len(), matcher.options().any_word)
}

/// Verify raw selector indexes against a record count.
pub fn verify_indexes(
    indexes: &[SelectorIndex],
    record_count: usize,
    any_word: bool,
) -> Result<VerificationReport, InvariantError> {
    let mut report = VerificationReport {
        records: record_count,
        selectors: indexes.len(),
        ..VerificationReport::default()
    };

    let mut per_record = vec![0usize; record_count];
    for (selector, index) in indexes.iter().enumerate() {
        let counts = verify_selector_index(selector, index, record_count, any_word)?;
        for (total, count) in per_record.iter_mut().zip(counts) {
            *total += count;
        }
        report.lists += index.lists.len();
        report.entries += index.entry_count();
    }
    report.max_entries_per_record = per_record.into_iter().max().unwrap_or(0);

    Ok(report)
}

/// Verify one selector's lists. Returns the entry count of every record.
fn verify_selector_index(
    selector: usize,
    index: &SelectorIndex,
    record_count: usize,
    any_word: bool,
) -> Result<Vec<usize>, InvariantError> {
    if index.keys.len() != record_count {
        return Err(InvariantError::MismatchedKeys {
            selector,
            keys: index.keys.len(),
            records: record_count,
        });
    }

    let tails: Vec<Vec<usize>> = if any_word {
        index.keys.iter().map(|key| word_tail_offsets(key)).collect()
    } else {
        vec![vec![0]; record_count]
    };

    let mut counts = vec![0usize; record_count];
    for (list_idx, list) in index.lists.iter().enumerate() {
        if list.word_offset != list_idx {
            return Err(InvariantError::MisnumberedList {
                selector,
                list: list_idx,
                word_offset: list.word_offset,
            });
        }

        for entry in &list.entries {
            if entry.position >= record_count {
                return Err(InvariantError::InvalidPosition {
                    selector,
                    list: list_idx,
                    position: entry.position,
                    records: record_count,
                });
            }

            if !index.keys[entry.position].is_char_boundary(entry.offset) {
                return Err(InvariantError::InvalidOffset {
                    selector,
                    list: list_idx,
                    position: entry.position,
                    offset: entry.offset,
                });
            }

            if tails[entry.position].get(list_idx) != Some(&entry.offset) {
                return Err(InvariantError::NotWordBoundary {
                    selector,
                    list: list_idx,
                    position: entry.position,
                    offset: entry.offset,
                });
            }

            counts[entry.position] += 1;
        }

        if let Some(index_at) = list
            .entries
            .windows(2)
            .position(|pair| index.key_at(&pair[0]) > index.key_at(&pair[1]))
        {
            return Err(InvariantError::UnsortedList {
                selector,
                list: list_idx,
                index: index_at + 1,
            });
        }
    }

    for (position, (&actual, record_tails)) in counts.iter().zip(&tails).enumerate() {
        let expected = record_tails.len();
        if actual < expected {
            return Err(InvariantError::MissingRecord {
                selector,
                position,
                expected,
                actual,
            });
        }
        if actual > expected {
            return Err(InvariantError::TooManyEntries {
                selector,
                position,
                expected,
                actual,
            });
        }
    }

    Ok(counts)
}
