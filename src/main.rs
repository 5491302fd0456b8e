// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::info;

use formsift::{Catalog, SearchConfig, SearchSession};

mod cli;
use cli::display::{self, detail_lines, print_lines, results_lines};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", display::themed(display::RED, &[display::BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            page,
            page_size,
            threshold,
            scores,
        } => {
            let config = apply_overrides(config, page_size, threshold)?;
            run_search(catalog, config, &query, page, scores)
        }
        Commands::List { page } => run_search(catalog, config, "", page, false),
        Commands::Show { form_number } => run_show(catalog, config, &form_number),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("Failed to load the built-in catalog")?,
    };
    info!(forms = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn apply_overrides(
    config: SearchConfig,
    page_size: Option<usize>,
    threshold: Option<f64>,
) -> Result<SearchConfig> {
    let config = match page_size {
        Some(page_size) => config.with_page_size(page_size).context("Invalid --page-size")?,
        None => config,
    };
    match threshold {
        Some(threshold) => config.with_threshold(threshold).context("Invalid --threshold"),
        None => Ok(config),
    }
}

fn open_session(catalog: Catalog, config: SearchConfig) -> Result<SearchSession> {
    let store = catalog.into_store().context("Failed to index catalog")?;
    Ok(SearchSession::new(store, config)?)
}

fn run_search(
    catalog: Catalog,
    config: SearchConfig,
    query: &str,
    page: i64,
    show_scores: bool,
) -> Result<()> {
    let mut session = open_session(catalog, config)?;
    session.set_query(query);
    session.go_to_page(page);

    let label = if query.trim().is_empty() {
        "CATALOG".to_string()
    } else {
        format!("RESULTS FOR \"{}\"", query.trim())
    };
    print_lines(&results_lines(
        &label,
        &session.visible_page(),
        &session.stats(),
        show_scores,
    ));
    Ok(())
}

fn run_show(catalog: Catalog, config: SearchConfig, form_number: &str) -> Result<()> {
    let mut session = open_session(catalog, config)?;
    let Some(record) = session.select(form_number) else {
        bail!("No form numbered '{}' in the catalog", form_number);
    };
    print_lines(&detail_lines(record));
    Ok(())
}
