pub mod activity;
pub mod calendar;
pub mod note;
pub mod reminder;
pub mod reset;
pub mod summary;
pub mod timer;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};
use tempo_core::{Config, DocumentStore, Tracker};

type CliError = Box<dyn std::error::Error>;

/// Open the tracker over the configured data directory.
pub fn open_tracker(config: &Config) -> Result<Tracker, CliError> {
    let store = DocumentStore::at(config.data_dir()?)?;
    Ok(Tracker::open(store))
}

/// `02h 03m 04s`, the format used across every duration display.
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{:02}h {:02}m {:02}s", total / 3600, (total % 3600) / 60, total % 60)
}

/// Parse `YYYY-MM-DD` (clap value parser).
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Parse `HH:MM` (clap value parser).
pub fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

/// Combine a local date and time into a timestamp.
pub fn local_datetime(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Local>, CliError> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| format!("{date} {time} does not exist in the local timezone").into())
}
