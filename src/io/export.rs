//! Export the unified dataset to CSV.
//!
//! The layout matches the cached snapshot schema, so an export can be
//! gzip-compressed and served as a snapshot.

use std::fs;
use std::path::Path;

use crate::domain::CaseRecord;
use crate::error::AppError;

/// Write rows to a CSV file with a header line.
pub fn write_cases_csv(path: &Path, records: &[CaseRecord]) -> Result<(), AppError> {
    let body = cases_to_csv(records)?;
    fs::write(path, body).map_err(|e| {
        AppError::io(path.display().to_string(), format!("failed to write export CSV: {e}"))
    })
}

/// Serialize rows to an in-memory CSV.
pub fn cases_to_csv(records: &[CaseRecord]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for r in records {
        writer
            .serialize(r)
            .map_err(|e| AppError::io("<memory>", format!("failed to serialize row: {e}")))?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::io("<memory>", format!("failed to finish CSV: {e}")))
}
