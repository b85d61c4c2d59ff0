use chrono::{TimeZone, Utc};
use studydesk::error::AppError;
use studydesk::stores::StudyTracker;

#[test]
fn end_computes_real_elapsed_duration() {
    let tracker = StudyTracker::new();
    let start = Utc.with_ymd_and_hms(2025, 1, 20, 14, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 1, 20, 14, 25, 0).unwrap();

    tracker
        .start_at(Some("Calculus".to_string()), start)
        .expect("start from idle");
    let session = tracker.end_at(end).expect("end while running");

    assert_eq!(session.duration_minutes, 25);
    assert_eq!(session.subject.as_deref(), Some("Calculus"));
}

#[test]
fn start_while_running_is_a_conflict() {
    let tracker = StudyTracker::new();
    tracker.start(None).expect("start from idle");

    assert!(matches!(tracker.start(None), Err(AppError::Conflict(_))));
    assert!(tracker.summary().expect("summary").running);
}

#[test]
fn end_while_idle_is_a_conflict() {
    let tracker = StudyTracker::new();

    assert!(matches!(tracker.end(), Err(AppError::Conflict(_))));
}

#[test]
fn summary_accumulates_completed_sessions() {
    let tracker = StudyTracker::new();
    let day = |h, m| Utc.with_ymd_and_hms(2025, 1, 21, h, m, 0).unwrap();

    tracker.start_at(None, day(9, 0)).expect("start");
    tracker.end_at(day(9, 40)).expect("end");
    tracker.start_at(None, day(15, 0)).expect("start");
    tracker.end_at(day(16, 30)).expect("end");

    let summary = tracker.summary().expect("summary");
    assert_eq!(summary.session_count, 2);
    assert_eq!(summary.total_minutes, 40 + 90);
    assert!(!summary.running);

    let sessions = tracker.sessions().expect("sessions");
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].duration_minutes, 40);
}

#[test]
fn tracker_is_reusable_after_each_session() {
    let tracker = StudyTracker::new();

    tracker.start(None).expect("first start");
    tracker.end().expect("first end");
    tracker.start(None).expect("second start after idle");
    assert!(tracker.summary().expect("summary").running);
}
