// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fastmatch command-line interface.
//!
//! Three subcommands: `query` to run prefixes once, `repl` to type
//! prefixes interactively, and `inspect` to print index statistics.
//! All of them share the same input and matcher flags.

pub mod display;
pub mod load;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fastmatch::{MatcherConfig, SelectorSpec};

#[derive(Parser)]
#[command(name = "fastmatch", about = "Prefix autocomplete over JSON records", version)]
pub struct Cli {
    /// Log index construction and queries to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the matches for one or more prefixes
    Query {
        #[command(flatten)]
        args: MatchArgs,

        /// Print matches as a JSON array per prefix
        #[arg(long)]
        json: bool,

        /// Prefixes to look up
        #[arg(required = true)]
        prefixes: Vec<String>,
    },

    /// Read prefixes from stdin, one per line
    Repl {
        #[command(flatten)]
        args: MatchArgs,
    },

    /// Show index statistics and verify its invariants
    Inspect {
        #[command(flatten)]
        args: MatchArgs,
    },
}

/// Input location plus matcher options.
///
/// Flags override whatever `--config` provides.
#[derive(Args, Debug, Clone)]
pub struct MatchArgs {
    /// JSON array file, .txt word list, or directory of .json shards
    #[arg(long)]
    pub input: PathBuf,

    /// JSON matcher config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Field to match on (repeatable, consulted in order)
    #[arg(short, long = "selector")]
    pub selectors: Vec<String>,

    /// Fold case of keys and prefixes
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Match the start of any word, not only the whole key
    #[arg(long)]
    pub any_word: bool,

    /// Return matches in input order
    #[arg(long)]
    pub preserve_order: bool,

    /// Maximum matches per query
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl MatchArgs {
    /// Load `--config` if given, then apply command-line overrides.
    pub fn resolve_config(&self) -> anyhow::Result<MatcherConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                MatcherConfig::from_json(&text)
                    .with_context(|| format!("failed to parse config {}", path.display()))?
            }
            None => MatcherConfig::default(),
        };

        if !self.selectors.is_empty() {
            config.selector = Some(SelectorSpec::Many(self.selectors.clone()));
        }
        config.case_insensitive |= self.case_insensitive;
        config.any_word |= self.any_word;
        config.preserve_order |= self.preserve_order;
        if self.limit.is_some() {
            config.limit = self.limit;
        }

        Ok(config)
    }
}
