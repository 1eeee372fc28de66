// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The prefix matcher: build once from a snapshot, query many times.
//!
//! ```
//! use fastmatch::{FastMatcher, MatcherOptions};
//!
//! let words = vec!["aa", "ba", "AB", "BB"];
//! let matcher = FastMatcher::new(&words, MatcherOptions::new().case_insensitive(true));
//!
//! assert_eq!(matcher.get_matches("a"), vec![&"aa", &"AB"]);
//! ```
//!
//! # Result ownership
//!
//! [`FastMatcher::get_matches`] allocates a fresh `Vec` per call and only
//! needs `&self`, so a shared matcher can serve readers on several threads.
//! When allocation per keystroke matters, [`MatchBuffer`] keeps one result
//! vector plus the query scratch space and overwrites them on every
//! [`MatchBuffer::query`]. Its contents are valid until the next query.

use std::borrow::Cow;
use std::fmt;

use crate::contracts;
use crate::index::build_index;
use crate::search::dedup::{collect_matches, QueryScratch};
use crate::selector::{fold_case, resolve_selectors, Record, Selector};
use crate::types::{SelectorIndex, SortedIndexList, DEFAULT_LIMIT};

/// Construction options.
///
/// Defaults: identity selector, case-sensitive, whole-key matching, key
/// order, 25 results.
pub struct MatcherOptions<T> {
    /// Key selectors, consulted in order. Empty means identity.
    pub selectors: Vec<Selector<T>>,
    /// Lowercase keys and prefixes before comparing.
    pub case_insensitive: bool,
    /// Also match the prefix against every word tail of a key.
    pub any_word: bool,
    /// Return matches in input order instead of key order.
    pub preserve_order: bool,
    /// Maximum unique matches per query. Zero means [`DEFAULT_LIMIT`].
    pub limit: usize,
}

impl<T> MatcherOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a selector. Accepts a [`Selector`] or a field name.
    pub fn selector(mut self, selector: impl Into<Selector<T>>) -> Self {
        self.selectors.push(selector.into());
        self
    }

    /// Add several selectors, keeping their order.
    pub fn selectors<S>(mut self, selectors: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<Selector<T>>,
    {
        self.selectors.extend(selectors.into_iter().map(Into::into));
        self
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn any_word(mut self, yes: bool) -> Self {
        self.any_word = yes;
        self
    }

    pub fn preserve_order(mut self, yes: bool) -> Self {
        self.preserve_order = yes;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The limit queries actually use.
    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_LIMIT
        } else {
            self.limit
        }
    }
}

impl<T> Default for MatcherOptions<T> {
    fn default() -> Self {
        Self {
            selectors: Vec::new(),
            case_insensitive: false,
            any_word: false,
            preserve_order: false,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl<T> Clone for MatcherOptions<T> {
    fn clone(&self) -> Self {
        Self {
            selectors: self.selectors.clone(),
            case_insensitive: self.case_insensitive,
            any_word: self.any_word,
            preserve_order: self.preserve_order,
            limit: self.limit,
        }
    }
}

impl<T> fmt::Debug for MatcherOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherOptions")
            .field("selectors", &self.selectors)
            .field("case_insensitive", &self.case_insensitive)
            .field("any_word", &self.any_word)
            .field("preserve_order", &self.preserve_order)
            .field("limit", &self.limit)
            .finish()
    }
}

/// Prefix matcher over an immutable snapshot of records.
pub struct FastMatcher<T> {
    records: Vec<T>,
    indexes: Vec<SelectorIndex>,
    options: MatcherOptions<T>,
}

impl<T: Record> FastMatcher<T> {
    /// Build a matcher over a copy of `records`.
    ///
    /// The caller's slice is not touched and may change afterwards.
    pub fn new(records: &[T], options: MatcherOptions<T>) -> Self
    where
        T: Clone,
    {
        Self::from_vec(records.to_vec(), options)
    }

    /// Build a matcher that takes ownership of `records`.
    ///
    /// Selectors run here, once per record. A panicking custom selector
    /// unwinds out of this call.
    pub fn from_vec(records: Vec<T>, options: MatcherOptions<T>) -> Self {
        let key_fns = resolve_selectors(&options.selectors);
        let indexes = build_index(
            &records,
            &key_fns,
            options.any_word,
            options.case_insensitive,
        );

        contracts::check_indexes_well_formed(&indexes, records.len(), options.any_word);

        Self {
            records,
            indexes,
            options,
        }
    }
}

impl<T> FastMatcher<T> {
    /// Records whose key (or, in any-word mode, a word tail of it) starts
    /// with `prefix`, deduplicated, at most `limit` of them.
    ///
    /// The empty prefix matches everything.
    pub fn get_matches(&self, prefix: &str) -> Vec<&T> {
        let mut scratch = QueryScratch::new();
        self.positions_into(prefix, &mut scratch);
        scratch
            .positions()
            .iter()
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Like [`get_matches`](Self::get_matches), but returns snapshot positions.
    pub fn match_positions(&self, prefix: &str) -> Vec<usize> {
        let mut scratch = QueryScratch::new();
        self.positions_into(prefix, &mut scratch);
        scratch.merger.into_positions()
    }

    /// Run a query into caller-owned scratch space.
    pub fn positions_into(&self, prefix: &str, scratch: &mut QueryScratch) {
        let prefix = self.normalize_prefix(prefix);
        let limit = self.options.effective_limit();
        collect_matches(
            &self.indexes,
            &prefix,
            limit,
            self.options.preserve_order,
            scratch,
        );

        contracts::check_matches_unique(scratch.positions());
        contracts::check_matches_within_limit(scratch.positions(), limit);

        tracing::trace!(
            prefix = &*prefix,
            candidates = scratch.items.len(),
            matches = scratch.positions().len(),
            "prefix query"
        );
    }

    /// A reusable result buffer bound to this matcher.
    pub fn buffer(&self) -> MatchBuffer<'_, T> {
        MatchBuffer::new(self)
    }

    fn normalize_prefix<'p>(&self, prefix: &'p str) -> Cow<'p, str> {
        if self.options.case_insensitive {
            Cow::Owned(fold_case(prefix))
        } else {
            Cow::Borrowed(prefix)
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The snapshot, in original order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn options(&self) -> &MatcherOptions<T> {
        &self.options
    }

    pub fn limit(&self) -> usize {
        self.options.effective_limit()
    }

    /// Per-selector indexes, in selector order.
    pub fn indexes(&self) -> &[SelectorIndex] {
        &self.indexes
    }

    pub fn selector_count(&self) -> usize {
        self.indexes.len()
    }

    /// Every sorted list with the selector index that owns its keys, in
    /// query order.
    pub fn lists(&self) -> impl Iterator<Item = (&SelectorIndex, &SortedIndexList)> + '_ {
        self.indexes
            .iter()
            .flat_map(|index| index.lists.iter().map(move |list| (index, list)))
    }

    /// Number of sorted lists across all selectors.
    pub fn list_count(&self) -> usize {
        self.lists().count()
    }

    /// Number of entries across all lists.
    pub fn entry_count(&self) -> usize {
        self.indexes.iter().map(SelectorIndex::entry_count).sum()
    }
}

impl<T: Clone> Clone for FastMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            indexes: self.indexes.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T> fmt::Debug for FastMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastMatcher")
            .field("records", &self.records.len())
            .field("lists", &self.list_count())
            .field("entries", &self.entry_count())
            .field("options", &self.options)
            .finish()
    }
}

/// A result vector that every query overwrites in place.
///
/// Holds the matcher borrow, the current matches and the scratch space used
/// to compute them, so a steady stream of queries allocates nothing once the
/// buffers have grown.
pub struct MatchBuffer<'m, T> {
    matcher: &'m FastMatcher<T>,
    matches: Vec<&'m T>,
    scratch: QueryScratch,
}

impl<'m, T> MatchBuffer<'m, T> {
    pub fn new(matcher: &'m FastMatcher<T>) -> Self {
        Self::with_vec(matcher, Vec::with_capacity(matcher.limit()))
    }

    /// Reuse an existing container. Its contents are discarded.
    pub fn with_vec(matcher: &'m FastMatcher<T>, mut matches: Vec<&'m T>) -> Self {
        matches.clear();
        Self {
            matcher,
            matches,
            scratch: QueryScratch::new(),
        }
    }

    /// Replace the buffer contents with the matches for `prefix`.
    pub fn query(&mut self, prefix: &str) -> &[&'m T] {
        let matcher = self.matcher;
        matcher.positions_into(prefix, &mut self.scratch);

        self.matches.clear();
        self.matches.extend(
            self.scratch
                .positions()
                .iter()
                .map(|&position| &matcher.records[position]),
        );
        &self.matches
    }

    /// Matches from the most recent query. Empty before the first one.
    pub fn matches(&self) -> &[&'m T] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn into_vec(self) -> Vec<&'m T> {
        self.matches
    }
}
