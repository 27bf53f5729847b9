//! State-change payloads handed to the presentation layer.
//!
//! Mutating tracker operations return the events they produced; the CLI
//! renders them directly. Payloads are plain data with no UI concerns.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::log::LogEntry;
use crate::session::SessionPhase;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SessionStarted {
        activity_id: String,
        activity: String,
        at: DateTime<Local>,
    },
    SessionStopped {
        activity_id: String,
        activity: String,
        duration_secs: f64,
        completed: bool,
        at: DateTime<Local>,
    },
    Snapshot {
        state: SessionPhase,
        activity_id: Option<String>,
        activity: Option<String>,
        elapsed_secs: f64,
        target_secs: Option<u64>,
        at: DateTime<Local>,
    },
}

impl Event {
    pub(crate) fn stopped(entry: &LogEntry, at: DateTime<Local>) -> Self {
        Event::SessionStopped {
            activity_id: entry.activity_id.clone(),
            activity: entry.activity.clone(),
            duration_secs: entry.duration,
            completed: entry.completed,
            at,
        }
    }
}
