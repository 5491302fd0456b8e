// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the formsift command-line interface.
//!
//! Three subcommands: `search` ranks the catalog against a query, `list` pages
//! through the whole catalog, and `show` opens the detail view of one form.
//! `--catalog` swaps the built-in IRS catalog for a JSON file and `--config`
//! loads weights, threshold and page size.

pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "formsift",
    about = "Fuzzy search over a catalog of tax forms",
    version
)]
pub struct Cli {
    /// Catalog JSON file (array of forms, or {"forms": [...]}). Defaults to the built-in IRS catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Search configuration JSON file (weights, threshold, page_size)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace). RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a query and show one page of results
    Search {
        /// Search query (form number, title words, description, use case...)
        query: String,

        /// Page to show (1-based, clamped into range)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Rows per page (overrides the config file)
        #[arg(long)]
        page_size: Option<usize>,

        /// Match threshold in [0, 1]; higher accepts fuzzier matches (overrides the config file)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Show the score column
        #[arg(long)]
        scores: bool,
    },

    /// Page through the whole catalog
    List {
        /// Page to show (1-based, clamped into range)
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,
    },

    /// Show the detail view of one form
    Show {
        /// Exact form number, e.g. "W-2" or "Schedule SE (Form 1040)"
        form_number: String,
    },
}

/// Default filter for `-v` count. `RUST_LOG` takes precedence when set.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr fmt subscriber. Stdout stays reserved for results.
pub fn init_logging(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter(verbose)));

    // A second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
