//! `ecdc-cases` library crate.
//!
//! Downloads the ECDC COVID-19 case distribution and reconciles the
//! discontinued daily series with the weekly series into one dataset.
//!
//! The binary (`ecdc`) is a thin wrapper around this library so that the
//! retrieval and merge logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
pub mod series;

pub use app::download_ecdc_cases;
pub use domain::{CUTOVER_DATE, CaseRecord, DownloadOptions};
pub use error::AppError;
