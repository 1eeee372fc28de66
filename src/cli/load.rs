// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record loading for the CLI.
//!
//! Accepts a JSON array file, a `.txt` word list (one record per non-empty
//! line), or a directory whose `*.json` files are each a JSON array. Shards
//! are concatenated in filename order so positions are reproducible.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde_json::Value;

pub fn load_records(input: &Path) -> Result<Vec<Value>> {
    if input.is_dir() {
        let shards = json_shards(input)?;
        let mut records = Vec::new();
        for shard in &shards {
            records.extend(load_json_array(shard)?);
        }
        tracing::debug!(shards = shards.len(), records = records.len(), "loaded directory");
        return Ok(records);
    }

    let records = match input.extension().and_then(|ext| ext.to_str()) {
        Some("txt") => load_word_list(input)?,
        _ => load_json_array(input)?,
    };
    tracing::debug!(path = %input.display(), records = records.len(), "loaded records");
    Ok(records)
}

fn json_shards(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut shards: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    shards.sort();

    if shards.is_empty() {
        bail!("no .json files in {}", dir.display());
    }
    Ok(shards)
}

fn load_json_array(path: &Path) -> Result<Vec<Value>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    match value {
        Value::Array(records) => Ok(records),
        _ => bail!("{} must contain a JSON array", path.display()),
    }
}

fn load_word_list(path: &Path) -> Result<Vec<Value>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| Value::String(line.to_string()))
        .collect())
}
