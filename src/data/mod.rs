//! Remote data sources.

pub mod ecdc;

pub use ecdc::{EcdcClient, SnapshotKind, SourceUrls};
