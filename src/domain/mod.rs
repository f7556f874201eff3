//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the unified case row (`CaseRecord`) and the raw weekly row (`RawWeeklyRecord`)
//! - download switches (`DownloadOptions`) and their text parsing
//! - the daily/weekly cutover date

pub mod types;

pub use types::*;
