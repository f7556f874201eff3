#![allow(dead_code)]

use std::io::Write;

use ecdc_cases::data::{EcdcClient, SnapshotKind, SourceUrls};
use flate2::Compression;
use flate2::write::GzEncoder;
use httpmock::MockServer;

pub const WEEKLY_PATH: &str = "/covid19/casedistribution/csv";
pub const CACHE_PATH: &str = "/cached_data";

pub const WEEKLY_HEADER: &str = "dateRep,year_week,cases_weekly,deaths_weekly,countriesAndTerritories,geoId,countryterritoryCode,popData2019,continentExp,notification_rate_per_100000_population_14-days";
pub const SNAPSHOT_HEADER: &str = "iso3c,country_territory,date,cases,deaths,timestamp";

pub fn client_for(server: &MockServer) -> EcdcClient {
    EcdcClient::new(SourceUrls {
        weekly: server.url(WEEKLY_PATH),
        cache_base: server.url(CACHE_PATH),
    })
}

pub fn snapshot_path(kind: SnapshotKind) -> String {
    format!("{CACHE_PATH}/{}", kind.file_name())
}

pub fn gzip(text: &str) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(text.as_bytes()).unwrap();
    enc.finish().unwrap()
}

pub fn weekly_csv(rows: &[&str]) -> String {
    let mut out = String::from(WEEKLY_HEADER);
    for r in rows {
        out.push('\n');
        out.push_str(r);
    }
    out.push('\n');
    out
}

/// Ten daily Italy rows, ending on the cutover date.
pub fn italy_daily_snapshot() -> String {
    let days = [
        "2020-01-01", "2020-02-01", "2020-03-01", "2020-04-01", "2020-05-01",
        "2020-06-01", "2020-07-01", "2020-08-01", "2020-11-01", "2020-12-14",
    ];
    let mut out = String::from(SNAPSHOT_HEADER);
    for (i, day) in days.iter().enumerate() {
        out.push_str(&format!("\nITA,Italy,{day},{},{},2021-01-04T10:00:00Z", 100 + i, i));
    }
    out.push('\n');
    out
}
