// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use fastmatch::{verify_matcher, FastMatcher, MatcherConfig, Record};
use serde_json::Value;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, BOLD, CYAN, GRAY, GREEN, YELLOW};
use cli::load::load_records;
use cli::{Cli, Commands, MatchArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "fastmatch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Query {
            args,
            json,
            prefixes,
        } => run_query(&args, json, &prefixes),
        Commands::Repl { args } => run_repl(&args),
        Commands::Inspect { args } => run_inspect(&args),
    }
}

/// A built matcher together with the config it came from.
struct Session {
    config: MatcherConfig,
    matcher: FastMatcher<Value>,
}

impl Session {
    fn open(args: &MatchArgs) -> Result<Self> {
        let config = args.resolve_config()?;
        let records = load_records(&args.input)?;
        let matcher = FastMatcher::from_vec(records, config.clone().into_options());
        tracing::info!(
            records = matcher.len(),
            entries = matcher.entry_count(),
            "matcher ready"
        );
        Ok(Session { config, matcher })
    }

    /// What to print for a matched record: its text, else its first
    /// selected field, else compact JSON.
    fn label(&self, record: &Value) -> String {
        if let Some(text) = record.text() {
            return text.into_owned();
        }
        self.config
            .field_names()
            .iter()
            .find_map(|name| record.field(name))
            .map(|text| text.into_owned())
            .unwrap_or_else(|| record.to_string())
    }
}

fn run_query(args: &MatchArgs, json: bool, prefixes: &[String]) -> Result<()> {
    let session = Session::open(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for prefix in prefixes {
        let matches = session.matcher.get_matches(prefix);
        if json {
            writeln!(out, "{}", serde_json::to_string(&matches)?)?;
            continue;
        }
        if prefixes.len() > 1 {
            writeln!(out, "{}", display::themed(CYAN, &[BOLD], prefix))?;
        }
        for record in matches {
            let label = session.label(record);
            writeln!(
                out,
                "{}",
                display::highlight(&label, prefix, session.config.case_insensitive)
            )?;
        }
    }

    Ok(())
}

fn run_repl(args: &MatchArgs) -> Result<()> {
    let session = Session::open(args)?;
    let mut buffer = session.matcher.buffer();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let prefix = line?;
        if prefix.is_empty() {
            continue;
        }
        for record in buffer.query(&prefix) {
            let label = session.label(record);
            writeln!(
                out,
                "{}",
                display::highlight(&label, &prefix, session.config.case_insensitive)
            )?;
        }
        out.flush()?;
    }

    Ok(())
}

fn run_inspect(args: &MatchArgs) -> Result<()> {
    let session = Session::open(args)?;
    let matcher = &session.matcher;
    let options = matcher.options();

    println!();
    display::section_top("MATCHER");
    display::stat_row("records", &matcher.len().to_string());
    display::stat_row("selectors", &matcher.selector_count().to_string());
    display::stat_row("sorted lists", &matcher.list_count().to_string());
    display::stat_row("index entries", &matcher.entry_count().to_string());
    display::stat_row("limit", &matcher.limit().to_string());
    display::section_bot();

    display::section_top("OPTIONS");
    let fields = session.config.field_names();
    let selectors = if fields.is_empty() {
        "(identity)".to_string()
    } else {
        fields.join(", ")
    };
    display::stat_row("selector", &selectors);
    display::stat_row("case insensitive", &options.case_insensitive.to_string());
    display::stat_row("any word", &options.any_word.to_string());
    display::stat_row("preserve order", &options.preserve_order.to_string());
    display::section_bot();

    display::section_top("INVARIANTS");
    match verify_matcher(matcher) {
        Ok(report) => {
            display::stat_row("status", &display::themed(GREEN, &[BOLD], "ok"));
            display::stat_row(
                "max per record",
                &report.max_entries_per_record.to_string(),
            );
            display::section_bot();
            Ok(())
        }
        Err(err) => {
            display::stat_row("status", &display::themed(YELLOW, &[BOLD], "violated"));
            display::row(&format!(" {}", display::themed(GRAY, &[], &err.to_string())));
            display::section_bot();
            Err(err.into())
        }
    }
}
