//! CSV decoding for retrieved payloads.
//!
//! Two shapes arrive over the wire:
//! - the live ECDC weekly CSV (raw, text dates) -> `RawWeeklyRecord`
//! - gzip-compressed snapshots already in the unified schema -> `CaseRecord`
//!
//! Decoding is strict: the first malformed row fails the whole payload.

use std::io::Read;

use csv::StringRecord;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::domain::{CaseRecord, RawWeeklyRecord};
use crate::error::AppError;

/// Decode the ECDC weekly CSV body.
pub fn decode_weekly_csv(body: &[u8]) -> Result<Vec<RawWeeklyRecord>, AppError> {
    decode_csv(body, "weekly CSV")
}

/// Decompress and decode a unified-schema snapshot.
pub fn decode_snapshot(body: &[u8]) -> Result<Vec<CaseRecord>, AppError> {
    let mut csv_bytes = Vec::new();
    GzDecoder::new(body)
        .read_to_end(&mut csv_bytes)
        .map_err(|e| AppError::parse("snapshot", format!("gzip decompression failed: {e}")))?;
    decode_csv(&csv_bytes, "snapshot CSV")
}

fn decode_csv<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<Vec<T>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body);

    let headers = reader
        .headers()
        .map_err(|e| AppError::parse(what, format!("failed to read headers: {e}")))?
        .clone();
    reader.set_headers(clean_headers(&headers));

    let mut out = Vec::new();
    for (idx, result) in reader.deserialize::<T>().enumerate() {
        // +2: header line, then 1-based lines.
        let line = idx + 2;
        let row =
            result.map_err(|e| AppError::parse(format!("{what} line {line}"), e.to_string()))?;
        out.push(row);
    }
    Ok(out)
}

fn clean_headers(headers: &StringRecord) -> StringRecord {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM,
    // which would hide the `dateRep` column from serde.
    headers
        .iter()
        .map(|name| name.trim().trim_start_matches('\u{feff}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use flate2::Compression;
    use flate2::write::GzEncoder;

    use super::*;

    const WEEKLY: &str = "\u{feff}dateRep,year_week,cases_weekly,deaths_weekly,countriesAndTerritories,geoId,countryterritoryCode,popData2019,continentExp\n\
        21/12/2020,2020-51,1000,50,Italy,IT,ITA,60359546,Europe\n\
        21/12/2020,2020-51,12,0,Cases_on_an_international_conveyance_Japan,JPG11668,,,Other\n";

    fn gzip(text: &str) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(text.as_bytes()).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn weekly_csv_keeps_mapped_columns_and_strips_bom() {
        let rows = decode_weekly_csv(WEEKLY.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date_rep, "21/12/2020");
        assert_eq!(rows[0].country_territory_code, "ITA");
        assert_eq!(rows[0].cases_weekly, 1000);
        assert_eq!(rows[1].country_territory_code, "");
    }

    #[test]
    fn weekly_csv_rejects_non_numeric_counts() {
        let body = "dateRep,cases_weekly,deaths_weekly,countriesAndTerritories,countryterritoryCode\n\
            21/12/2020,many,0,Italy,ITA\n";
        let err = decode_weekly_csv(body.as_bytes()).unwrap_err();
        assert!(matches!(err, AppError::Parse { ref context, .. } if context.contains("line 2")));
    }

    #[test]
    fn snapshot_decodes_unified_rows() {
        let body = gzip(
            "iso3c,country_territory,date,cases,deaths,timestamp\n\
             ITA,Italy,2020-12-14,17938,491,2021-01-04T10:00:00Z\n",
        );
        let rows = decode_snapshot(&body).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2020, 12, 14).unwrap());
        assert_eq!(rows[0].deaths, 491);
    }

    #[test]
    fn non_gzip_snapshot_is_an_error() {
        let err = decode_snapshot(b"iso3c,country_territory,date\n").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
