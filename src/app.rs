//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and environment defaults
//! - installs the log subscriber
//! - downloads and merges the case series
//! - prints the first rows on request
//! - writes an optional export

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::data::EcdcClient;
use crate::domain::{CaseRecord, DownloadOptions};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ecdc` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let options = options_from_cli(&cli, DownloadOptions::from_env()?);

    init_logging();

    let client = EcdcClient::from_env();
    let records = pipeline::download_cases(&client, &options)?;

    // The metadata summary is logged by the pipeline unless silent.
    if let Some(n) = cli.head {
        print!("{}", crate::report::format_rows(&records[..n.min(records.len())]));
    }

    if let Some(path) = &cli.export {
        crate::io::export::write_cases_csv(path, &records)?;
        if !options.silent {
            tracing::info!("Wrote {} rows to {}", records.len(), path.display());
        }
    }

    Ok(())
}

/// Library entry point: download with environment-configured endpoints.
pub fn download_ecdc_cases(options: &DownloadOptions) -> Result<Vec<CaseRecord>, AppError> {
    pipeline::download_cases(&EcdcClient::from_env(), options)
}

/// CLI switches only ever turn behavior on; environment values fill the rest.
fn options_from_cli(cli: &Cli, env: DownloadOptions) -> DownloadOptions {
    DownloadOptions {
        silent: cli.silent || env.silent,
        cached: cli.cached || env.cached,
        use_daily: env.use_daily && !cli.no_daily,
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
