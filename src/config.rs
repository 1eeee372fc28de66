// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serializable matcher configuration.
//!
//! The JSON shape follows the classic autocomplete options object:
//!
//! ```json
//! { "selector": "term", "caseInsensitive": true, "limit": 20 }
//! ```
//!
//! `selector` may be a single field name or an array of them. Function
//! selectors have no serialized form; add them in code with
//! [`MatcherOptions::selector`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::matcher::MatcherOptions;
use crate::selector::Selector;
use crate::types::DEFAULT_LIMIT;

/// One field name or an ordered list of field names.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum SelectorSpec {
    One(String),
    Many(Vec<String>),
}

impl SelectorSpec {
    pub fn field_names(&self) -> &[String] {
        match self {
            SelectorSpec::One(name) => std::slice::from_ref(name),
            SelectorSpec::Many(names) => names,
        }
    }
}

/// Options as they appear in a config file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct MatcherConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<SelectorSpec>,
    pub case_insensitive: bool,
    pub any_word: bool,
    pub preserve_order: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Error loading a [`MatcherConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// The input is not valid JSON or has the wrong shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid matcher config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl MatcherConfig {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Field names in selector order. Empty means identity.
    pub fn field_names(&self) -> &[String] {
        self.selector
            .as_ref()
            .map(SelectorSpec::field_names)
            .unwrap_or(&[])
    }

    pub fn into_options<T>(self) -> MatcherOptions<T> {
        self.into()
    }
}

impl<T> From<MatcherConfig> for MatcherOptions<T> {
    fn from(config: MatcherConfig) -> Self {
        MatcherOptions {
            selectors: config
                .field_names()
                .iter()
                .map(|name| Selector::Field(name.clone()))
                .collect(),
            case_insensitive: config.case_insensitive,
            any_word: config.any_word,
            preserve_order: config.preserve_order,
            limit: config.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}
