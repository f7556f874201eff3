//! Command-line parsing for the `ecdc` binary.
//!
//! Parsing stays separate from retrieval and merge logic; the switches here are
//! folded into `DownloadOptions` by `app`.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ecdc",
    version,
    about = "Download ECDC COVID-19 case counts as one daily + weekly series"
)]
pub struct Cli {
    /// Suppress progress narration.
    #[arg(short, long)]
    pub silent: bool,

    /// Use the pre-built combined snapshot instead of live ECDC data.
    #[arg(short, long)]
    pub cached: bool,

    /// Return the weekly series only, without the historical daily data.
    #[arg(long)]
    pub no_daily: bool,

    /// Print the first N rows of the dataset.
    #[arg(long, value_name = "N")]
    pub head: Option<usize>,

    /// Export the dataset to CSV.
    #[arg(long, value_name = "CSV")]
    pub export: Option<PathBuf>,
}
