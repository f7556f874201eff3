//! Formatted terminal output.
//!
//! We keep formatting code in one place so the pipeline stays free of
//! presentation details.

use std::fmt::Write;

use crate::domain::CaseRecord;
use crate::report::DatasetSummary;

/// Multi-line metadata block for a downloaded dataset.
pub fn format_summary(summary: &DatasetSummary) -> String {
    let mut out = String::new();
    let range = match (summary.first_date, summary.last_date) {
        (Some(a), Some(b)) => format!("{a} .. {b}"),
        _ => "-".to_string(),
    };
    let timestamp = summary
        .timestamp
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    let _ = writeln!(out, "ECDC COVID-19 cases");
    let _ = writeln!(out, "  rows:       {}", summary.rows);
    let _ = writeln!(out, "  countries:  {}", summary.countries);
    let _ = writeln!(out, "  dates:      {range}");
    let _ = writeln!(out, "  cases:      {}", summary.total_cases);
    let _ = writeln!(out, "  deaths:     {}", summary.total_deaths);
    let _ = write!(out, "  retrieved:  {timestamp}");
    out
}

/// Fixed-width table of the given rows.
pub fn format_rows(records: &[CaseRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<32} {:<10} {:>10} {:>8}",
        "iso3c", "country_territory", "date", "cases", "deaths"
    );
    for r in records {
        let _ = writeln!(
            out,
            "{:<5} {:<32} {:<10} {:>10} {:>8}",
            r.iso3c,
            truncate(&r.country_territory, 32),
            r.date,
            r.cases,
            r.deaths
        );
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}
