//! Integration tests for the tracker workflow.
//!
//! Drives the full path from catalog changes through sessions to daily
//! summaries and persistence, over a temporary data directory and a
//! manual clock.

use std::sync::Arc;

use chrono::{Duration, Local, TimeZone};
use tempfile::tempdir;
use tempo_core::{Clock, DocumentStore, Event, ManualClock, TargetSpec, Tracker};

fn open(dir: &std::path::Path) -> (Tracker, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Local.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap(),
    ));
    let store = DocumentStore::at(dir).unwrap();
    (Tracker::with_clock(store, clock.clone()), clock)
}

#[test]
fn course_session_over_target_completes() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    // course carries a 7200s target; run it for 8000s.
    tracker.start("course").unwrap();
    clock.advance(Duration::seconds(8000));
    let stopped = tracker.stop().expect("session was running");

    match stopped {
        Event::SessionStopped { duration_secs, completed, .. } => {
            assert_eq!(duration_secs, 8000.0);
            assert!(completed);
        }
        other => panic!("expected SessionStopped, got {other:?}"),
    }

    let rows = tracker.summarize(tracker.today());
    let course = rows.iter().find(|r| r.activity_id == "course").unwrap();
    assert_eq!(course.total_secs, 8000.0);
    assert!(course.completed);
    assert_eq!(
        tracker.progress_fraction("course", tracker.today()).unwrap(),
        Some(1.0)
    );

    // Stopping again is a no-op.
    assert!(tracker.stop().is_none());
    assert_eq!(tracker.log().len(), 1);
}

#[test]
fn switching_activities_auto_stops_the_first() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    tracker.start("gym").unwrap();
    clock.advance(Duration::seconds(600));
    let events = tracker.start("course").unwrap();

    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        Event::SessionStopped { activity_id, duration_secs, .. }
            if activity_id == "gym" && *duration_secs == 600.0
    ));
    assert!(matches!(
        &events[1],
        Event::SessionStarted { activity_id, .. } if activity_id == "course"
    ));

    assert_eq!(tracker.log().len(), 1);
    assert_eq!(tracker.session().running_activity(), Some("course"));
    assert_eq!(tracker.catalog().len(), 5);
}

#[test]
fn adjacent_sessions_do_not_merge() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    tracker.start("study").unwrap();
    clock.advance(Duration::seconds(300));
    tracker.stop().unwrap();
    tracker.start("study").unwrap();
    clock.advance(Duration::seconds(200));
    tracker.stop().unwrap();

    let durations: Vec<f64> = tracker.log().all().iter().map(|e| e.duration).collect();
    assert_eq!(durations, [300.0, 200.0]);

    let rows = tracker.summarize(tracker.today());
    let study = rows.iter().find(|r| r.activity_id == "study").unwrap();
    assert_eq!(study.total_secs, 500.0);
}

#[test]
fn state_survives_a_reload() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    tracker
        .add_activity("P", "Piano", "#8888ff", TargetSpec::none())
        .unwrap();
    tracker.start("gym").unwrap();
    clock.advance(Duration::seconds(120));
    tracker.stop().unwrap();
    let due = clock.now() + Duration::hours(3);
    tracker.add_reminder("stretch", due).unwrap();
    tracker.add_event("team dinner", due, "#ff6b6b").unwrap();
    let notebook = tracker.create_notebook("Ideas", "#4a90e2").unwrap();
    tracker
        .set_notebook_content(&notebook.id, "write more tests")
        .unwrap();

    let (reloaded, _) = open(dir.path());
    assert_eq!(reloaded.catalog(), tracker.catalog());
    assert_eq!(reloaded.log(), tracker.log());
    assert_eq!(reloaded.reminders(), tracker.reminders());
    assert_eq!(reloaded.calendar(), tracker.calendar());
    assert_eq!(reloaded.notes(), tracker.notes());
    assert!(!reloaded.session().is_running());
}

#[test]
fn running_session_survives_a_reload() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    tracker.start("study").unwrap();
    clock.advance(Duration::seconds(45));

    // A fresh process picks the session up and keeps counting.
    let store = DocumentStore::at(dir.path()).unwrap();
    let reloaded = Tracker::with_clock(store, clock.clone());
    assert_eq!(reloaded.session().running_activity(), Some("study"));
    assert_eq!(reloaded.elapsed_secs(), 45.0);
}

#[test]
fn malformed_documents_fall_back_without_failing_the_rest() {
    let dir = tempdir().unwrap();
    {
        let (mut tracker, clock) = open(dir.path());
        tracker.start("gym").unwrap();
        clock.advance(Duration::seconds(60));
        tracker.stop().unwrap();
    }
    std::fs::write(dir.path().join("activities.json"), "{broken").unwrap();

    let (tracker, _) = open(dir.path());
    // Activities fell back to the starter set; logs still loaded.
    assert_eq!(tracker.catalog().len(), 5);
    assert_eq!(tracker.log().len(), 1);
}

#[test]
fn elapsed_is_monotonic_while_running() {
    let dir = tempdir().unwrap();
    let (mut tracker, clock) = open(dir.path());

    tracker.start("gym").unwrap();
    let mut last = tracker.elapsed_secs();
    for _ in 0..5 {
        clock.advance(Duration::milliseconds(1500));
        let next = tracker.elapsed_secs();
        assert!(next >= last);
        last = next;
    }
    assert_eq!(last, 7.5);
}
