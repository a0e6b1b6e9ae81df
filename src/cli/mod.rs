// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the unerg-search command-line interface.
//!
//! Three subcommands: `search` ranks a JSON file of items through the local
//! index, `remote` asks the repository API once, and `live` runs the debounced
//! search bar against either of them, one stdin line per input change.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unerg-search",
    about = "Fuzzy search over the Postgrado UNERG document repository",
    version
)]
pub struct Cli {
    /// Log search decisions (debounce, cancellation, timing) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a JSON array of items with the local index
    Search {
        /// Path to a JSON file holding an array of items
        items: String,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Field to search (repeatable); defaults to title, description, content
        #[arg(short, long = "field")]
        fields: Vec<String>,

        /// Field boost as FIELD=WEIGHT (repeatable)
        #[arg(short, long = "boost", value_parser = parse_boost)]
        boosts: Vec<(String, f64)>,

        /// Fuzzy threshold (edits per query character)
        #[arg(long, conflicts_with = "no_fuzzy")]
        fuzzy: Option<f64>,

        /// Disable fuzzy matching
        #[arg(long)]
        no_fuzzy: bool,

        /// Disable prefix matching
        #[arg(long)]
        no_prefix: bool,

        /// Show each result's score
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Query the repository's search endpoint once
    Remote {
        /// Search query
        query: String,

        /// API root, overriding config and UNERG_API_URL
        #[arg(long)]
        base_url: Option<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search bar: each stdin line is the current input
    ///
    /// `:clear` clears the input, `:retry` searches the current text again,
    /// `:quit` exits.
    Live {
        /// Search this JSON file locally instead of calling the API
        #[arg(long, conflicts_with = "base_url")]
        items: Option<String>,

        /// API root, overriding config and UNERG_API_URL
        #[arg(long)]
        base_url: Option<String>,

        /// Debounce window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
}

/// Parse `FIELD=WEIGHT`.
fn parse_boost(raw: &str) -> Result<(String, f64), String> {
    let (field, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=WEIGHT, got '{}'", raw))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{}'", raw));
    }
    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight in '{}'", raw))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be a non-negative number in '{}'", raw));
    }
    Ok((field.to_string(), weight))
}
