//! Session state machine.
//!
//! A wall-clock-based two-state machine: `Idle` or `Running` on exactly one
//! activity. It holds no thread and no timer -- the caller supplies `now`
//! on every transition, and a periodic caller drives re-renders while
//! running. Stopping is the only path that produces a [`LogEntry`].

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::activity::ActivityCatalog;
use crate::error::NotFoundError;
use crate::log::{LogEntry, LogStore};

/// The state the tracker is in, without payload. Used in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    Idle,
    Running,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Idle,
    Running {
        activity_id: String,
        started_at: DateTime<Local>,
    },
}

/// Owns the "currently running activity" state. At most one session is
/// ever running.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    state: SessionState,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::Idle
    }
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the tracker from a persisted state.
    pub fn from_state(state: SessionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::Idle => SessionPhase::Idle,
            SessionState::Running { .. } => SessionPhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running { .. })
    }

    /// Id of the running activity, if any.
    pub fn running_activity(&self) -> Option<&str> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Running { activity_id, .. } => Some(activity_id),
        }
    }

    /// Start a session on `activity_id` at `now`.
    ///
    /// If a session is already running it is stopped first -- starting
    /// never silently discards elapsed time. Returns the log entry of the
    /// finalized previous session, if there was one.
    ///
    /// # Errors
    /// [`NotFoundError::Activity`] if the id is not in the catalog. The
    /// running session, if any, is left untouched in that case.
    pub fn start(
        &mut self,
        catalog: &ActivityCatalog,
        log: &mut LogStore,
        activity_id: &str,
        now: DateTime<Local>,
    ) -> Result<Option<LogEntry>, NotFoundError> {
        if !catalog.contains(activity_id) {
            return Err(NotFoundError::Activity { id: activity_id.to_string() });
        }
        let finalized = self.stop(catalog, log, now);
        self.state = SessionState::Running {
            activity_id: activity_id.to_string(),
            started_at: now,
        };
        Ok(finalized)
    }

    /// Stop the running session at `now`, appending its log entry.
    ///
    /// No-op when idle. Duration is clamped to >= 0; the entry records the
    /// activity's current display name and whether its target was reached.
    pub fn stop(
        &mut self,
        catalog: &ActivityCatalog,
        log: &mut LogStore,
        now: DateTime<Local>,
    ) -> Option<LogEntry> {
        let SessionState::Running { activity_id, started_at } =
            std::mem::take(&mut self.state)
        else {
            return None;
        };

        let duration = clamped_secs(started_at, now);
        // The activity can be gone if it was removed mid-session; the entry
        // then keeps the id as its name and carries no target.
        let (name, target_secs) = match catalog.get(&activity_id) {
            Some(activity) => (activity.name.clone(), activity.target_secs),
            None => (activity_id.clone(), None),
        };

        let entry = LogEntry {
            activity_id,
            activity: name,
            date: now.date_naive(),
            start_time: started_at,
            duration,
            completed: target_secs.is_some_and(|t| duration >= t as f64),
        };
        log.append(entry.clone());
        Some(entry)
    }

    /// Elapsed seconds of the running session; 0 when idle.
    pub fn elapsed_secs(&self, now: DateTime<Local>) -> f64 {
        match &self.state {
            SessionState::Idle => 0.0,
            SessionState::Running { started_at, .. } => clamped_secs(*started_at, now),
        }
    }
}

fn clamped_secs(from: DateTime<Local>, to: DateTime<Local>) -> f64 {
    let elapsed = to.signed_duration_since(from).max(Duration::zero());
    elapsed.num_milliseconds() as f64 / 1000.0
}
