// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix autocomplete over a fixed collection of records.
//!
//! Build a [`FastMatcher`] once from a snapshot of records, then ask it, as
//! often as you like, which records have a key starting with some prefix.
//! Each query is a binary search per sorted key list plus a short forward
//! walk, never a scan of the whole collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ selector.rs │────▶│   index.rs   │────▶│  search/     │────▶│ search/      │
//! │ (Selector,  │     │ (word tails, │     │  (lower      │     │  dedup.rs    │
//! │  Record)    │     │ sorted lists)│     │  bound, scan)│     │ (adaptive    │
//! └─────────────┘     └──────────────┘     └──────────────┘     │  limit)      │
//!                                                               └──────┬───────┘
//!                                                                      ▼
//!                                                         ┌──────────────────────┐
//!                                                         │ matcher.rs           │
//!                                                         │ (FastMatcher,        │
//!                                                         │  MatchBuffer)        │
//!                                                         └──────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use fastmatch::{FastMatcher, MatcherOptions};
//!
//! let words = ["a", "a b", "a c", "b", "c a b"];
//! let matcher = FastMatcher::new(&words, MatcherOptions::new().any_word(true));
//!
//! let found: Vec<&str> = matcher.get_matches("b").into_iter().copied().collect();
//! assert_eq!(found, ["b", "a b", "c a b"]);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod index;
mod matcher;
pub mod search;
mod selector;
#[doc(hidden)]
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use config::{ConfigError, MatcherConfig, SelectorSpec};
pub use index::{build_index, build_selector_index, is_list_sorted, word_tail_offsets, word_tails};
pub use matcher::{FastMatcher, MatchBuffer, MatcherOptions};
pub use search::dedup::{collect_matches, MatchMerger, QueryScratch};
pub use search::{lower_bound, scan_prefix, starts_with};
pub use selector::{fold_case, resolve_selectors, KeyFn, Record, Selector};
pub use types::{IndexEntry, SelectorIndex, SortedIndexList, DEFAULT_LIMIT};
pub use verify::{verify_matcher, InvariantError, VerificationReport};
