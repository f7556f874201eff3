//! HTTP retrieval of the ECDC weekly CSV and the cached snapshots.

use reqwest::blocking::Client;

use crate::domain::{CaseRecord, RawWeeklyRecord};
use crate::error::AppError;
use crate::io::ingest::{decode_snapshot, decode_weekly_csv};

/// Authoritative weekly case distribution published by ECDC.
pub const DEFAULT_WEEKLY_URL: &str = "https://opendata.ecdc.europa.eu/covid19/casedistribution/csv";
/// Repository directory holding the pre-built snapshots.
pub const DEFAULT_CACHE_BASE_URL: &str =
    "https://raw.githubusercontent.com/joachim-gassen/tidycovid19/master/cached_data";

/// Which cached snapshot to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Historical daily series, through the cutover date.
    Daily,
    /// Fully combined daily + weekly series.
    Combined,
}

impl SnapshotKind {
    pub fn file_name(self) -> &'static str {
        match self {
            SnapshotKind::Daily => "ecdc_covid19_cases_daily.csv.gz",
            SnapshotKind::Combined => "ecdc_covid19_cases.csv.gz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SnapshotKind::Daily => "daily",
            SnapshotKind::Combined => "combined",
        }
    }
}

/// Remote locations for one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub weekly: String,
    pub cache_base: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            weekly: DEFAULT_WEEKLY_URL.to_string(),
            cache_base: DEFAULT_CACHE_BASE_URL.to_string(),
        }
    }
}

impl SourceUrls {
    /// Defaults, overridden by `ECDC_WEEKLY_URL` / `ECDC_CACHE_BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            weekly: std::env::var("ECDC_WEEKLY_URL").unwrap_or(defaults.weekly),
            cache_base: std::env::var("ECDC_CACHE_BASE_URL").unwrap_or(defaults.cache_base),
        }
    }

    pub fn snapshot(&self, kind: SnapshotKind) -> String {
        format!("{}/{}", self.cache_base.trim_end_matches('/'), kind.file_name())
    }
}

pub struct EcdcClient {
    client: Client,
    urls: SourceUrls,
}

impl EcdcClient {
    pub fn new(urls: SourceUrls) -> Self {
        Self {
            client: Client::new(),
            urls,
        }
    }

    pub fn from_env() -> Self {
        Self::new(SourceUrls::from_env())
    }

    pub fn urls(&self) -> &SourceUrls {
        &self.urls
    }

    /// Retrieve a cached snapshot, already in the unified schema.
    pub fn fetch_snapshot(&self, kind: SnapshotKind) -> Result<Vec<CaseRecord>, AppError> {
        let url = self.urls.snapshot(kind);
        let body = self.get_bytes(&url)?;
        decode_snapshot(&body)
    }

    /// Retrieve the live weekly CSV as raw rows.
    pub fn fetch_weekly_raw(&self) -> Result<Vec<RawWeeklyRecord>, AppError> {
        let body = self.get_bytes(&self.urls.weekly)?;
        decode_weekly_csv(&body)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, AppError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| AppError::retrieval(url, format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::retrieval(
                url,
                format!("request failed with status {}", resp.status()),
            ));
        }

        let body = resp
            .bytes()
            .map_err(|e| AppError::retrieval(url, format!("failed to read response body: {e}")))?;
        Ok(body.to_vec())
    }
}
