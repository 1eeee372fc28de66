// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error and report types for structural verification.

use std::fmt;

/// Error type for invariant violations.
///
/// `selector` and `list` are indexes into [`FastMatcher::indexes`] and its
/// `lists`; `position` is a record position in the snapshot.
///
/// [`FastMatcher::indexes`]: crate::FastMatcher::indexes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A selector has a different number of keys than there are records.
    MismatchedKeys {
        selector: usize,
        keys: usize,
        records: usize,
    },
    /// A list's word offset does not match its place in the selector.
    MisnumberedList {
        selector: usize,
        list: usize,
        word_offset: usize,
    },
    /// An entry refers to a record outside the snapshot.
    InvalidPosition {
        selector: usize,
        list: usize,
        position: usize,
        records: usize,
    },
    /// An entry offset is past the key or splits a character.
    InvalidOffset {
        selector: usize,
        list: usize,
        position: usize,
        offset: usize,
    },
    /// An entry offset is not the start of the list's word tail.
    NotWordBoundary {
        selector: usize,
        list: usize,
        position: usize,
        offset: usize,
    },
    /// Adjacent entries are out of key order.
    UnsortedList {
        selector: usize,
        list: usize,
        index: usize,
    },
    /// A record is indexed fewer times than its key has tails.
    MissingRecord {
        selector: usize,
        position: usize,
        expected: usize,
        actual: usize,
    },
    /// A record is indexed more times than its key has tails.
    TooManyEntries {
        selector: usize,
        position: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MismatchedKeys {
                selector,
                keys,
                records,
            } => {
                write!(
                    f,
                    "selector {} has {} keys for {} records",
                    selector, keys, records
                )
            }
            InvariantError::MisnumberedList {
                selector,
                list,
                word_offset,
            } => {
                write!(
                    f,
                    "selector {} list {} claims word offset {}",
                    selector, list, word_offset
                )
            }
            InvariantError::InvalidPosition {
                selector,
                list,
                position,
                records,
            } => {
                write!(
                    f,
                    "selector {} list {}: position {} >= records {}",
                    selector, list, position, records
                )
            }
            InvariantError::InvalidOffset {
                selector,
                list,
                position,
                offset,
            } => {
                write!(
                    f,
                    "selector {} list {}: offset {} is not a char boundary of key {}",
                    selector, list, offset, position
                )
            }
            InvariantError::NotWordBoundary {
                selector,
                list,
                position,
                offset,
            } => {
                write!(
                    f,
                    "selector {} list {}: offset {} of key {} is not the list's word tail",
                    selector, list, offset, position
                )
            }
            InvariantError::UnsortedList {
                selector,
                list,
                index,
            } => {
                write!(
                    f,
                    "selector {} list {} not sorted at index {}",
                    selector, list, index
                )
            }
            InvariantError::MissingRecord {
                selector,
                position,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "selector {}: record {} has {} entries, expected {}",
                    selector, position, actual, expected
                )
            }
            InvariantError::TooManyEntries {
                selector,
                position,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "selector {}: record {} has {} entries, at most {} allowed",
                    selector, position, actual, expected
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Summary of a successful verification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub records: usize,
    pub selectors: usize,
    pub lists: usize,
    pub entries: usize,
    /// Largest number of entries any single record has across all lists.
    pub max_entries_per_record: usize,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} selectors, {} lists, {} entries (max {} per record)",
            self.records, self.selectors, self.lists, self.entries, self.max_entries_per_record
        )
    }
}
