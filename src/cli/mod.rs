// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sitefind command-line interface.
//!
//! Two subcommands for site authors: `search` runs the exact query engine the
//! modal uses against a local `index.json`, `inspect` summarizes what the
//! generator put into it. Handy for tuning the threshold before shipping.

pub mod display;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use sitefind::IndexLoadError;

#[derive(Parser)]
#[command(
    name = "sitefind",
    about = "Query and inspect static-site search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against an index.json and print the ranked hits
    Search {
        /// Path to the index.json produced by the site generator
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Highest field score that still matches (0 = exact only)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Print the result-list markup the modal would render
        #[arg(long)]
        html: bool,
    },

    /// Summarize an index.json
    Inspect {
        /// Path to the index.json produced by the site generator
        index: PathBuf,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Index {
        path: PathBuf,
        #[source]
        source: IndexLoadError,
    },

    #[error("threshold must be between 0 and 1, got {0}")]
    Threshold(f64),
}
