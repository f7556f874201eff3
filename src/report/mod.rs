//! Dataset metadata: summary and formatted terminal output.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::CaseRecord;

pub mod format;

pub use format::{format_rows, format_summary};

/// Coarse description of an assembled dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub countries: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Latest retrieval timestamp present in the data.
    pub timestamp: Option<DateTime<Utc>>,
    /// Summed in `i128`; `i64` per-row counts cannot overflow it.
    pub total_cases: i128,
    pub total_deaths: i128,
}

/// Summarize rows without assuming any ordering.
pub fn summarize(records: &[CaseRecord]) -> DatasetSummary {
    let countries: BTreeSet<&str> = records.iter().map(|r| r.country_territory.as_str()).collect();

    DatasetSummary {
        rows: records.len(),
        countries: countries.len(),
        first_date: records.iter().map(|r| r.date).min(),
        last_date: records.iter().map(|r| r.date).max(),
        timestamp: records.iter().map(|r| r.timestamp).max(),
        total_cases: records.iter().map(|r| i128::from(r.cases)).sum(),
        total_deaths: records.iter().map(|r| i128::from(r.deaths)).sum(),
    }
}
