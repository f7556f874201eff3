//! Input/output helpers.
//!
//! - CSV / gzip decoding of retrieved payloads (`ingest`)
//! - CSV export of the unified dataset (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
