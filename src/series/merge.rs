//! Daily + weekly series concatenation at the cutover date.

use tracing::{info, warn};

use crate::domain::{CUTOVER_DATE, CaseRecord};

/// Splice the historical daily series in front of the weekly series.
///
/// Weekly rows dated on or before `CUTOVER_DATE` are dropped; the daily rows
/// are kept as-is. The result is daily order followed by weekly order and is
/// not re-sorted.
pub fn merge_series(
    daily: Vec<CaseRecord>,
    weekly: Vec<CaseRecord>,
    silent: bool,
) -> Vec<CaseRecord> {
    let weekly: Vec<CaseRecord> = weekly.into_iter().filter(|r| r.date > CUTOVER_DATE).collect();

    if !silent {
        info!(
            daily_rows = daily.len(),
            weekly_rows = weekly.len(),
            "Combining {} daily rows (through {CUTOVER_DATE}) with {} weekly rows",
            daily.len(),
            weekly.len()
        );
        // The snapshot is trusted to end at the cutover; we only flag it.
        let late = daily.iter().filter(|r| r.date > CUTOVER_DATE).count();
        if late > 0 {
            warn!(
                rows = late,
                "Daily snapshot contains rows after {CUTOVER_DATE}; dates may be duplicated"
            );
        }
    }

    let mut out = daily;
    out.reserve(weekly.len());
    out.extend(weekly);
    out
}
