//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - decoded straight from cached snapshots
//! - produced by the weekly normalizer
//! - exported back to CSV

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Last day covered by the discontinued daily series.
///
/// Weekly rows are only admitted into a merged dataset when their date is
/// strictly after this day.
pub const CUTOVER_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 12, 14) {
    Some(d) => d,
    None => panic!("invalid cutover date"),
};

/// One row of the unified case series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    /// ISO3 country code. Some source rows carry no code and leave this empty.
    pub iso3c: String,
    pub country_territory: String,
    pub date: NaiveDate,
    /// New cases attributed to `date` (a day or a reporting week).
    ///
    /// Signed: ECDC publishes negative values where earlier counts were
    /// corrected downwards, and they are passed through unchanged.
    pub cases: i64,
    /// New deaths attributed to `date`; may be negative, as with `cases`.
    pub deaths: i64,
    /// When this dataset was assembled; identical for every row of one retrieval.
    pub timestamp: DateTime<Utc>,
}

/// A row of the ECDC weekly CSV as published.
///
/// Only the columns we map are decoded; `year_week`, `geoId`, population and
/// notification-rate columns are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawWeeklyRecord {
    /// Day-first date string, e.g. `14/12/2020`.
    #[serde(rename = "dateRep")]
    pub date_rep: String,
    /// May be negative for weeks carrying corrections.
    pub cases_weekly: i64,
    pub deaths_weekly: i64,
    #[serde(rename = "countriesAndTerritories")]
    pub countries_and_territories: String,
    #[serde(rename = "countryterritoryCode", default)]
    pub country_territory_code: String,
}

/// Caller-facing switches for one download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Suppress progress narration.
    pub silent: bool,
    /// Return the pre-built combined snapshot instead of fetching live data.
    pub cached: bool,
    /// Splice the historical daily series in front of the weekly series.
    pub use_daily: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            silent: false,
            cached: false,
            use_daily: true,
        }
    }
}

impl DownloadOptions {
    /// Build options from textual values (environment, config files).
    ///
    /// `silent` and `cached` must each be a single boolean; `use_daily` is
    /// read leniently.
    pub fn parse(silent: &str, cached: &str, use_daily: &str) -> Result<Self, AppError> {
        Ok(Self {
            silent: parse_flag("silent", silent)?,
            cached: parse_flag("cached", cached)?,
            use_daily: parse_lenient_flag(use_daily),
        })
    }

    /// Read `ECDC_SILENT`, `ECDC_CACHED` and `ECDC_USE_DAILY`, falling back to
    /// the defaults for unset variables. A `.env` file is honored.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        let read = |key: &str, fallback: bool| {
            std::env::var(key).unwrap_or_else(|_| fallback.to_string())
        };
        Self::parse(
            &read("ECDC_SILENT", defaults.silent),
            &read("ECDC_CACHED", defaults.cached),
            &read("ECDC_USE_DAILY", defaults.use_daily),
        )
    }
}

/// Parse a strictly boolean flag.
///
/// Accepts exactly one of `true`/`false`/`1`/`0` (case-insensitive). A list
/// such as `true,false` or a word such as `yes` is rejected.
pub fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    let trimmed = raw.trim();
    if trimmed.contains([',', ';', ' ']) {
        return Err(AppError::config(
            name,
            format!("expected a single boolean value, got multiple values '{trimmed}'"),
        ));
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::config(
            name,
            format!("expected a boolean value (true/false), got '{trimmed}'"),
        )),
    }
}

fn parse_lenient_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "y" | "t" | "on"
    )
}
