//! Weekly-to-unified schema mapping.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{CaseRecord, RawWeeklyRecord};
use crate::error::AppError;

/// Day-first format used by the ECDC `dateRep` column.
const DATE_REP_FORMAT: &str = "%d/%m/%Y";

/// Map raw weekly rows into the unified schema.
///
/// Every output row carries `now` as its timestamp. Rows are sorted by
/// `iso3c`, then `date`; the sort is stable so rows sharing both keys keep
/// their source order.
pub fn normalize_weekly(
    raw: Vec<RawWeeklyRecord>,
    now: DateTime<Utc>,
) -> Result<Vec<CaseRecord>, AppError> {
    let mut out = raw
        .into_iter()
        .map(|row| {
            Ok(CaseRecord {
                date: parse_date_rep(&row.date_rep)?,
                iso3c: row.country_territory_code,
                country_territory: row.countries_and_territories,
                cases: row.cases_weekly,
                deaths: row.deaths_weekly,
                timestamp: now,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    out.sort_by(|a, b| a.iso3c.cmp(&b.iso3c).then(a.date.cmp(&b.date)));
    Ok(out)
}

/// Parse a `dateRep` value such as `14/12/2020`.
///
/// Only the day/month/year order with a four-digit year is accepted;
/// `12/14/2020` and `21/12/20` fail rather than being reinterpreted.
pub fn parse_date_rep(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    let invalid = |reason: String| {
        AppError::parse("dateRep", format!("invalid date '{s}' (expected DD/MM/YYYY): {reason}"))
    };

    // `%Y` alone would read `20` as the year 0020.
    let year = trimmed.rsplit('/').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("year must have four digits".to_string()));
    }

    NaiveDate::parse_from_str(trimmed, DATE_REP_FORMAT).map_err(|e| invalid(e.to_string()))
}
