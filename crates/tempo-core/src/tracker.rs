//! The top-level state object.
//!
//! A [`Tracker`] owns every collection, the document store, and the clock.
//! Callers never touch the collections mutably; each mutating operation
//! validates first (no state change on validation or lookup failure),
//! applies, then flushes the documents it touched. A failed flush is a
//! warning, not an operation failure -- in-memory state is already correct
//! and the next successful save catches up.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::activity::{Activity, ActivityCatalog, TargetSpec};
use crate::calendar::{CalendarEvent, CalendarStore};
use crate::clock::{Clock, SystemClock};
use crate::error::CoreError;
use crate::event::Event;
use crate::log::{LogEntry, LogStore};
use crate::notes::{Notebook, NotebookStore};
use crate::reminder::{Reminder, ReminderStore};
use crate::session::SessionTracker;
use crate::storage::{Document, DocumentStore};
use crate::summary::{self, ActivitySummary};

/// What a reset cleared, per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetSummary {
    pub activities: usize,
    pub reminders: usize,
    pub calendar_events: usize,
    pub notebooks: usize,
    pub log_entries: usize,
}

pub struct Tracker {
    catalog: ActivityCatalog,
    session: SessionTracker,
    log: LogStore,
    reminders: ReminderStore,
    calendar: CalendarStore,
    notes: NotebookStore,
    store: DocumentStore,
    clock: Arc<dyn Clock>,
}

impl Tracker {
    /// Open a tracker over `store`, loading every document best-effort.
    ///
    /// A missing activities document yields the default starter set; any
    /// other missing document yields an empty collection. Malformed
    /// documents are logged and treated the same way -- one bad file never
    /// takes the rest of the state down.
    pub fn open(store: DocumentStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: DocumentStore, clock: Arc<dyn Clock>) -> Self {
        let catalog =
            load_or(&store, Document::Activities, ActivityCatalog::default_set);
        let reminders = load_or(&store, Document::Reminders, ReminderStore::new);
        let calendar = load_or(&store, Document::CalendarEvents, CalendarStore::new);
        let notes = load_or(&store, Document::Notes, NotebookStore::new);
        let log = load_or(&store, Document::Logs, LogStore::new);

        // The live session outlives one-shot callers through an auxiliary
        // file; a missing or unreadable one simply means idle.
        let session = match store.load_session::<crate::session::SessionState>() {
            Ok(Some(state)) => SessionTracker::from_state(state),
            Ok(None) => SessionTracker::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load session state, starting idle");
                SessionTracker::new()
            }
        };

        Self {
            catalog,
            session,
            log,
            reminders,
            calendar,
            notes,
            store,
            clock,
        }
    }

    // ── Read access ──────────────────────────────────────────────────

    pub fn catalog(&self) -> &ActivityCatalog {
        &self.catalog
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    pub fn session(&self) -> &SessionTracker {
        &self.session
    }

    pub fn reminders(&self) -> &ReminderStore {
        &self.reminders
    }

    pub fn calendar(&self) -> &CalendarStore {
        &self.calendar
    }

    pub fn notes(&self) -> &NotebookStore {
        &self.notes
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    // ── Activity catalog ─────────────────────────────────────────────

    /// Add an activity; returns its definition.
    pub fn add_activity(
        &mut self,
        prefix: &str,
        name: &str,
        color: &str,
        target: TargetSpec,
    ) -> Result<Activity, CoreError> {
        let activity = self.catalog.add(prefix, name, color, target)?.clone();
        self.flush(&[Document::Activities]);
        Ok(activity)
    }

    /// Remove an activity. If it is currently running, the session is
    /// stopped (and logged) first so no elapsed time is lost.
    pub fn remove_activity(
        &mut self,
        id: &str,
    ) -> Result<(Activity, Option<LogEntry>), CoreError> {
        if !self.catalog.contains(id) {
            return Err(crate::error::NotFoundError::Activity { id: id.to_string() }.into());
        }
        let finalized = if self.session.running_activity() == Some(id) {
            self.session.stop(&self.catalog, &mut self.log, self.clock.now())
        } else {
            None
        };
        let removed = self.catalog.remove(id)?;
        self.flush(&[Document::Activities, Document::Logs]);
        if finalized.is_some() {
            self.persist_session();
        }
        Ok((removed, finalized))
    }

    // ── Session control ──────────────────────────────────────────────

    /// Start a session, finalizing a running one first. Returns the
    /// produced events in order (a stop, if any, then the start).
    pub fn start(&mut self, activity_id: &str) -> Result<Vec<Event>, CoreError> {
        let now = self.clock.now();
        let finalized = self
            .session
            .start(&self.catalog, &mut self.log, activity_id, now)?;

        let mut events = Vec::new();
        if let Some(entry) = &finalized {
            events.push(Event::stopped(entry, now));
        }
        let activity = self.catalog.get(activity_id).expect("validated by start");
        events.push(Event::SessionStarted {
            activity_id: activity.id.clone(),
            activity: activity.name.clone(),
            at: now,
        });

        self.flush(&[Document::Logs]);
        self.persist_session();
        Ok(events)
    }

    /// Stop the running session. `None` when already idle.
    pub fn stop(&mut self) -> Option<Event> {
        let now = self.clock.now();
        let entry = self.session.stop(&self.catalog, &mut self.log, now)?;
        self.flush(&[Document::Logs]);
        self.persist_session();
        Some(Event::stopped(&entry, now))
    }

    /// Elapsed seconds of the running session; 0 when idle.
    pub fn elapsed_secs(&self) -> f64 {
        self.session.elapsed_secs(self.clock.now())
    }

    /// Current session state as a plain-data snapshot.
    pub fn snapshot(&self) -> Event {
        let now = self.clock.now();
        let activity = self
            .session
            .running_activity()
            .map(|id| (id.to_string(), self.catalog.get(id)));
        Event::Snapshot {
            state: self.session.phase(),
            activity_id: activity.as_ref().map(|(id, _)| id.clone()),
            activity: activity
                .as_ref()
                .and_then(|(id, a)| a.map(|a| a.name.clone()).or_else(|| Some(id.clone()))),
            elapsed_secs: self.session.elapsed_secs(now),
            target_secs: activity.as_ref().and_then(|(_, a)| a.and_then(|a| a.target_secs)),
            at: now,
        }
    }

    // ── Summaries ────────────────────────────────────────────────────

    /// Per-activity totals and completion for `date`, in catalog order.
    pub fn summarize(&self, date: NaiveDate) -> Vec<ActivitySummary> {
        summary::summarize(&self.catalog, &self.log, &self.session, date, self.clock.now())
    }

    /// Fraction of the target reached on `date`, capped at 1.0. `None`
    /// for activities without a target.
    pub fn progress_fraction(
        &self,
        activity_id: &str,
        date: NaiveDate,
    ) -> Result<Option<f64>, CoreError> {
        if !self.catalog.contains(activity_id) {
            return Err(crate::error::NotFoundError::Activity {
                id: activity_id.to_string(),
            }
            .into());
        }
        let rows = self.summarize(date);
        let row = rows
            .iter()
            .find(|r| r.activity_id == activity_id)
            .expect("summarize covers every cataloged activity");
        Ok(summary::progress_fraction(row.total_secs, row.target_secs))
    }

    // ── Reminders ────────────────────────────────────────────────────

    pub fn add_reminder(
        &mut self,
        text: &str,
        due: chrono::DateTime<chrono::Local>,
    ) -> Result<Reminder, CoreError> {
        let reminder = self.reminders.add(text, due)?.clone();
        self.flush(&[Document::Reminders]);
        Ok(reminder)
    }

    pub fn remove_reminder(&mut self, id: &str) -> Result<Reminder, CoreError> {
        let removed = self.reminders.remove(id)?;
        self.flush(&[Document::Reminders]);
        Ok(removed)
    }

    // ── Calendar events ──────────────────────────────────────────────

    pub fn add_event(
        &mut self,
        text: &str,
        due: chrono::DateTime<chrono::Local>,
        color: &str,
    ) -> Result<CalendarEvent, CoreError> {
        let event = self.calendar.add(text, due, color)?.clone();
        self.flush(&[Document::CalendarEvents]);
        Ok(event)
    }

    pub fn remove_event(&mut self, id: &str) -> Result<CalendarEvent, CoreError> {
        let removed = self.calendar.remove(id)?;
        self.flush(&[Document::CalendarEvents]);
        Ok(removed)
    }

    // ── Notebooks ────────────────────────────────────────────────────

    pub fn create_notebook(&mut self, name: &str, color: &str) -> Result<Notebook, CoreError> {
        let now = self.clock.now();
        let notebook = self.notes.create(name, color, now)?.clone();
        self.flush(&[Document::Notes]);
        Ok(notebook)
    }

    pub fn set_notebook_content(&mut self, id: &str, content: &str) -> Result<(), CoreError> {
        self.notes.update_content(id, content)?;
        self.flush(&[Document::Notes]);
        Ok(())
    }

    pub fn remove_notebook(&mut self, id: &str) -> Result<Notebook, CoreError> {
        let removed = self.notes.remove(id)?;
        self.flush(&[Document::Notes]);
        Ok(removed)
    }

    // ── Reset ────────────────────────────────────────────────────────

    /// Delete all five documents and return to the default in-memory
    /// state. Files already missing are fine; the first real IO failure
    /// aborts with the remaining files untouched.
    pub fn reset(&mut self) -> Result<ResetSummary, CoreError> {
        let summary = ResetSummary {
            activities: self.catalog.len(),
            reminders: self.reminders.list().len(),
            calendar_events: self.calendar.list().len(),
            notebooks: self.notes.list().len(),
            log_entries: self.log.len(),
        };

        for doc in Document::ALL {
            self.store.remove(doc)?;
        }
        self.store.clear_session()?;

        self.catalog = ActivityCatalog::default_set();
        self.session = SessionTracker::new();
        self.log = LogStore::new();
        self.reminders = ReminderStore::new();
        self.calendar = CalendarStore::new();
        self.notes = NotebookStore::new();
        Ok(summary)
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Save the given documents, independently. Failures are warnings;
    /// one failed document never stops the others.
    fn flush(&self, docs: &[Document]) {
        for doc in docs {
            let result = match doc {
                Document::Activities => self.store.save(*doc, &self.catalog),
                Document::Reminders => self.store.save(*doc, &self.reminders),
                Document::CalendarEvents => self.store.save(*doc, &self.calendar),
                Document::Notes => self.store.save(*doc, &self.notes),
                Document::Logs => self.store.save(*doc, &self.log),
            };
            if let Err(e) = result {
                tracing::warn!(document = doc.file_name(), error = %e, "failed to save document");
            }
        }
    }

    /// Mirror the in-memory session to disk: save while running, clear
    /// when idle. Failures are warnings, like any other flush.
    fn persist_session(&self) {
        let result = if self.session.is_running() {
            self.store.save_session(self.session.state())
        } else {
            self.store.clear_session().map(|_| ())
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to persist session state");
        }
    }
}

fn load_or<T, F>(store: &DocumentStore, doc: Document, default: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.load(doc) {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(e) => {
            tracing::warn!(document = doc.file_name(), error = %e, "failed to load document, using defaults");
            default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::TargetUnit;
    use crate::clock::ManualClock;
    use chrono::{Duration, Local, TimeZone};
    use tempfile::tempdir;

    fn tracker_at(dir: &std::path::Path) -> (Tracker, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap(),
        ));
        let store = DocumentStore::at(dir).unwrap();
        (Tracker::with_clock(store, clock.clone()), clock)
    }

    #[test]
    fn bootstraps_default_catalog_when_no_document_exists() {
        let dir = tempdir().unwrap();
        let (tracker, _) = tracker_at(dir.path());
        assert_eq!(tracker.catalog().len(), 5);
        assert!(tracker.log().is_empty());
    }

    #[test]
    fn removing_running_activity_finalizes_its_session() {
        let dir = tempdir().unwrap();
        let (mut tracker, clock) = tracker_at(dir.path());

        tracker.start("gym").unwrap();
        clock.advance(Duration::seconds(90));

        let (removed, finalized) = tracker.remove_activity("gym").unwrap();
        assert_eq!(removed.id, "gym");
        let entry = finalized.expect("running session was finalized");
        assert_eq!(entry.duration, 90.0);

        assert!(!tracker.session().is_running());
        assert!(!tracker.catalog().contains("gym"));
        assert!(tracker.summarize(tracker.today()).iter().all(|r| r.activity_id != "gym"));
        assert_eq!(tracker.log().len(), 1);
    }

    #[test]
    fn validation_failure_leaves_state_and_disk_untouched() {
        let dir = tempdir().unwrap();
        let (mut tracker, _) = tracker_at(dir.path());

        assert!(tracker.add_activity("X", "", "#123456", TargetSpec::none()).is_err());
        assert_eq!(tracker.catalog().len(), 5);
        assert!(!dir.path().join("activities.json").exists());

        assert!(tracker.start("missing").is_err());
        assert!(!tracker.session().is_running());
    }

    #[test]
    fn mutations_flush_their_documents() {
        let dir = tempdir().unwrap();
        let (mut tracker, clock) = tracker_at(dir.path());

        tracker
            .add_activity("R", "Reading", "#123456", TargetSpec {
                value: 30,
                unit: TargetUnit::Minutes,
            })
            .unwrap();
        assert!(dir.path().join("activities.json").exists());

        tracker.start("gym").unwrap();
        assert!(dir.path().join("session.json").exists());

        clock.advance(Duration::seconds(10));
        tracker.stop().unwrap();
        assert!(dir.path().join("logs.json").exists());
        assert!(!dir.path().join("session.json").exists());
        assert!(!dir.path().join("reminders.json").exists());
    }

    #[test]
    fn progress_fraction_requires_known_activity() {
        let dir = tempdir().unwrap();
        let (tracker, _) = tracker_at(dir.path());
        let today = tracker.today();

        assert!(tracker.progress_fraction("missing", today).is_err());
        assert_eq!(tracker.progress_fraction("gym", today).unwrap(), None);
        assert_eq!(tracker.progress_fraction("course", today).unwrap(), Some(0.0));
    }

    #[test]
    fn reset_restores_defaults_and_tolerates_missing_files() {
        let dir = tempdir().unwrap();
        let (mut tracker, clock) = tracker_at(dir.path());

        tracker.start("course").unwrap();
        clock.advance(Duration::seconds(42));
        tracker.stop().unwrap();
        tracker.remove_activity("gym").unwrap();
        // Only activities.json and logs.json exist at this point.

        let summary = tracker.reset().unwrap();
        assert_eq!(summary.activities, 4);
        assert_eq!(summary.log_entries, 1);

        assert_eq!(tracker.catalog().len(), 5);
        assert!(tracker.catalog().contains("gym"));
        assert!(tracker.log().is_empty());
        for doc in Document::ALL {
            assert!(!dir.path().join(doc.file_name()).exists());
        }
    }
}
