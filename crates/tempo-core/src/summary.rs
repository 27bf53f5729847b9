//! Per-day accumulation of logged and live time.
//!
//! Summaries are recomputed from the append-only log on every query rather
//! than kept as running totals. The log is local and small; a linear pass
//! at UI refresh cadence costs nothing measurable.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCatalog;
use crate::log::{LogEntry, LogStore};
use crate::session::SessionTracker;

/// Accumulated time and completion state for one activity on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub activity_id: String,
    pub activity: String,
    pub color: String,
    /// Sum of matching log durations plus live elapsed time, in seconds.
    pub total_secs: f64,
    /// True once any matching log entry reached the target. Live elapsed
    /// time never sets this; completion is recorded only at stop time.
    pub completed: bool,
    pub target_secs: Option<u64>,
}

/// Compute the summary for every cataloged activity on `date`.
///
/// Rows come back in catalog order. Log entries resolve to their bucket by
/// id first; entries with an unknown or missing id fall back to the display
/// name and only count when exactly one activity bears that name. The live
/// session contributes its elapsed time only when `date` is the calendar
/// day of `now` -- `now` is passed in so one rendering pass sees one clock
/// reading.
pub fn summarize(
    catalog: &ActivityCatalog,
    log: &LogStore,
    session: &SessionTracker,
    date: NaiveDate,
    now: DateTime<Local>,
) -> Vec<ActivitySummary> {
    let mut rows: Vec<ActivitySummary> = catalog
        .list()
        .iter()
        .map(|a| ActivitySummary {
            activity_id: a.id.clone(),
            activity: a.name.clone(),
            color: a.color.clone(),
            total_secs: 0.0,
            completed: false,
            target_secs: a.target_secs,
        })
        .collect();

    for entry in log.all().iter().filter(|e| e.date == date) {
        let Some(id) = resolve_bucket(catalog, entry) else {
            continue;
        };
        if let Some(row) = rows.iter_mut().find(|r| r.activity_id == id) {
            row.total_secs += entry.duration;
            if entry.completed {
                row.completed = true;
            }
        }
    }

    if date == now.date_naive() {
        if let Some(running) = session.running_activity() {
            if let Some(row) = rows.iter_mut().find(|r| r.activity_id == running) {
                row.total_secs += session.elapsed_secs(now);
            }
        }
    }

    rows
}

/// Fraction of the target reached, capped at 1.0. `None` when the activity
/// has no target.
pub fn progress_fraction(total_secs: f64, target_secs: Option<u64>) -> Option<f64> {
    let target = target_secs.filter(|t| *t > 0)?;
    Some((total_secs / target as f64).min(1.0))
}

/// Find the catalog id a log entry accumulates under, if any.
fn resolve_bucket(catalog: &ActivityCatalog, entry: &LogEntry) -> Option<String> {
    if !entry.activity_id.is_empty() && catalog.contains(&entry.activity_id) {
        return Some(entry.activity_id.clone());
    }
    let mut matches = catalog.by_name(&entry.activity);
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only.id.clone()),
        // Zero or ambiguous name matches: the entry contributes nowhere.
        _ => None,
    }
}
