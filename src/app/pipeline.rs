//! Source selection: which retrievals run, in what order, and how their
//! results are combined.
//!
//! cached snapshot -> return as-is
//! daily snapshot + live weekly -> normalize -> merge
//! live weekly -> normalize

use chrono::Utc;
use tracing::info;

use crate::data::{EcdcClient, SnapshotKind};
use crate::domain::{CaseRecord, DownloadOptions};
use crate::error::AppError;
use crate::report::{format_summary, summarize};
use crate::series::{merge_series, normalize_weekly};

/// Download the ECDC case series using the configured client.
///
/// Retrievals run strictly one after another; the first failure aborts the
/// whole download.
pub fn download_cases(
    client: &EcdcClient,
    options: &DownloadOptions,
) -> Result<Vec<CaseRecord>, AppError> {
    let silent = options.silent;

    if options.cached {
        let cached = fetch_snapshot(client, SnapshotKind::Combined, silent)?;
        report(&cached, silent);
        return Ok(cached);
    }

    let daily = if options.use_daily {
        Some(fetch_snapshot(client, SnapshotKind::Daily, silent)?)
    } else {
        None
    };

    narrate(silent, || format!("Downloading ECDC weekly data from {}", client.urls().weekly));
    let raw = client.fetch_weekly_raw()?;
    narrate(silent, || format!("Done: {} weekly rows", raw.len()));

    let weekly = normalize_weekly(raw, Utc::now())?;

    let out = match daily {
        Some(daily) => merge_series(daily, weekly, silent),
        None => weekly,
    };

    report(&out, silent);
    Ok(out)
}

fn fetch_snapshot(
    client: &EcdcClient,
    kind: SnapshotKind,
    silent: bool,
) -> Result<Vec<CaseRecord>, AppError> {
    narrate(silent, || {
        format!(
            "Downloading cached {} ECDC data from {}",
            kind.label(),
            client.urls().snapshot(kind)
        )
    });
    let rows = client.fetch_snapshot(kind)?;
    narrate(silent, || format!("Done: {} {} rows", rows.len(), kind.label()));
    Ok(rows)
}

fn narrate(silent: bool, message: impl FnOnce() -> String) {
    if !silent {
        info!("{}", message());
    }
}

fn report(records: &[CaseRecord], silent: bool) {
    if !silent {
        info!("\n{}", format_summary(&summarize(records)));
    }
}
