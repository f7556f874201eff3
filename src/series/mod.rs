//! Series reconciliation: weekly normalization and the daily/weekly merge.

pub mod merge;
pub mod normalize;

pub use merge::merge_series;
pub use normalize::{normalize_weekly, parse_date_rep};
