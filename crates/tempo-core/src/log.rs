//! Append-only session log.
//!
//! A [`LogEntry`] is created exactly once, when a session stops, and is
//! never edited afterwards. Entries carry both the stable activity id and
//! the display name at stop time; records written by older versions may
//! have an empty id and are resolved by name.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One completed session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Stable id of the activity. Empty on legacy records.
    #[serde(default)]
    pub activity_id: String,
    /// Display name of the activity at the moment the session stopped.
    pub activity: String,
    /// Local calendar day the session stopped on.
    pub date: NaiveDate,
    /// When the session started.
    pub start_time: DateTime<Local>,
    /// Elapsed seconds, clamped to >= 0.
    pub duration: f64,
    /// Whether the activity's target duration was reached.
    pub completed: bool,
}

/// Append-only ordered sequence of [`LogEntry`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogStore {
    entries: Vec<LogEntry>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Entries for a given day and display name, in insertion order.
    pub fn query<'a>(
        &'a self,
        date: NaiveDate,
        activity_name: &'a str,
    ) -> impl Iterator<Item = &'a LogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.date == date && e.activity == activity_name)
    }

    /// Full sequence in insertion order.
    pub fn all(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
