// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use tracing::debug;

use sitefind::modal::render::results_markup;
use sitefind::{FuzzyOptions, IndexSummary, SearchIndexHandle};

mod cli;
use cli::display::{self, styled, BOLD, DIM, YELLOW};
use cli::{Cli, CliError, Commands};

fn main() {
    cli::logging::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            threshold,
            html,
        } => run_search(&index, &query, limit, threshold, html),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

/// Read and parse an index.json from disk.
fn read_index(path: &Path, options: FuzzyOptions) -> Result<SearchIndexHandle, CliError> {
    let body = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    SearchIndexHandle::from_json(&body, options).map_err(|source| CliError::Index {
        path: path.to_path_buf(),
        source,
    })
}

fn run_search(
    path: &Path,
    query: &str,
    limit: usize,
    threshold: Option<f64>,
    html: bool,
) -> Result<(), CliError> {
    let mut options = FuzzyOptions::default();
    if let Some(threshold) = threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CliError::Threshold(threshold));
        }
        options.threshold = threshold;
    }

    let index = read_index(path, options)?;
    let query = query.trim();

    let start = Instant::now();
    let results = index.search(query, limit);
    let elapsed = start.elapsed();
    debug!(query, hits = results.len(), ?elapsed, "search");

    if html {
        println!("{}", results_markup(&results));
        return Ok(());
    }

    display::section_top(&format!("\"{}\"", display::truncate(query, 40)));
    if results.is_empty() {
        display::row(&styled(&[DIM], " no results"));
    }
    for (i, result) in results.iter().enumerate() {
        let title = if result.record.title.is_empty() {
            "(untitled)"
        } else {
            result.record.title.as_str()
        };
        display::row(&format!(
            " {:>2}. {}  {}",
            i + 1,
            styled(&[BOLD], &display::truncate(title, 44)),
            display::rank_value(result.rank)
        ));
        display::row(&format!(
            "     {}",
            styled(&[DIM], &display::truncate(&result.record.permalink, 60))
        ));
    }
    display::section_bot();
    println!(
        "{} of {} records in {:.2} ms",
        results.len(),
        index.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn run_inspect(path: &Path) -> Result<(), CliError> {
    let index = read_index(path, FuzzyOptions::default())?;
    let summary = IndexSummary::of(index.records());

    display::section_top(&path.display().to_string());
    display::row(&format!(" records        {}", summary.records));
    for (key, count) in summary.filled {
        display::row(&format!(" {:<14} {}/{}", key.as_str(), count, summary.records));
    }
    display::row(&format!(" content chars  {}", summary.total_content_chars));
    if summary.missing_permalinks() > 0 {
        display::row(&styled(
            &[YELLOW],
            &format!(" {} records without a permalink", summary.missing_permalinks()),
        ));
    }
    for permalink in &summary.duplicate_permalinks {
        display::row(&styled(
            &[YELLOW],
            &format!(" duplicate permalink {}", display::truncate(permalink, 50)),
        ));
    }
    display::section_bot();
    Ok(())
}
