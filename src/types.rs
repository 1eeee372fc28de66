// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index data types.
//!
//! An index entry does not own its key. Like a suffix array, it is a pair of
//! coordinates (record position, byte offset) into a per-selector key table,
//! so any-word mode costs two words per tail instead of a string copy.

/// Default number of unique matches returned per query.
pub const DEFAULT_LIMIT: usize = 25;

/// One sortable entry: the tail of `keys[position]` starting at `offset`.
///
/// `offset` is a byte offset and always lies on a char boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexEntry {
    /// Position of the record in the matcher's snapshot.
    pub position: usize,
    /// Byte offset of the comparison key inside the record's full key.
    pub offset: usize,
}

/// Entries for one (selector, word offset) pair, sorted by comparison key.
#[derive(Debug, Clone, Default)]
pub struct SortedIndexList {
    /// Which word of the key this list indexes. Always 0 outside any-word mode.
    pub word_offset: usize,
    pub entries: Vec<IndexEntry>,
}

impl SortedIndexList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything built from a single selector.
#[derive(Debug, Clone, Default)]
pub struct SelectorIndex {
    /// Comparison key of every record, indexed by position.
    pub keys: Vec<String>,
    /// Sorted lists in ascending word offset.
    pub lists: Vec<SortedIndexList>,
}

impl SelectorIndex {
    /// The comparison key an entry stands for.
    ///
    /// Out-of-range coordinates yield `""` rather than panicking.
    pub fn key_at(&self, entry: &IndexEntry) -> &str {
        self.keys
            .get(entry.position)
            .and_then(|key| key.get(entry.offset..))
            .unwrap_or("")
    }

    /// Total entries across all of this selector's lists.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(SortedIndexList::len).sum()
    }
}
