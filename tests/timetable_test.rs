use std::sync::Arc;

use studydesk::error::AppError;
use studydesk::models::{DayOfWeek, NewTimetableRequest};
use studydesk::rowstore::InMemoryRowStore;
use studydesk::session::Session;
use studydesk::stores::TimetableService;

fn entry(day: DayOfWeek, subject: &str, start: &str, end: &str) -> NewTimetableRequest {
    NewTimetableRequest {
        day_of_week: day,
        subject: subject.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        room: None,
    }
}

fn service() -> TimetableService {
    TimetableService::new(Arc::new(InMemoryRowStore::new()))
}

#[tokio::test]
async fn refresh_returns_calendar_order() {
    let service = service();
    let session = Session::new("student-1");

    // Inserted out of display order on purpose.
    service
        .create(&session, entry(DayOfWeek::Friday, "Chemistry", "08:00", "09:00"))
        .await
        .expect("create");
    service
        .create(&session, entry(DayOfWeek::Monday, "Physics", "10:00", "11:00"))
        .await
        .expect("create");
    service
        .create(&session, entry(DayOfWeek::Monday, "Maths", "09:00", "10:00"))
        .await
        .expect("create");

    let entries = service.refresh(&session).await.expect("refresh");

    let order: Vec<(DayOfWeek, String)> = entries
        .iter()
        .map(|e| (e.day_of_week, e.start_time.clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            (DayOfWeek::Monday, "09:00".to_string()),
            (DayOfWeek::Monday, "10:00".to_string()),
            (DayOfWeek::Friday, "08:00".to_string()),
        ]
    );
}

#[tokio::test]
async fn create_reflects_entry_exactly_once_after_refresh() {
    let service = service();
    let session = Session::new("student-1");

    let entries = service
        .create(&session, entry(DayOfWeek::Tuesday, "English", "14:00", "15:00"))
        .await
        .expect("create");

    let matching: Vec<_> = entries.iter().filter(|e| e.subject == "English").collect();
    assert_eq!(matching.len(), 1);
    assert!(!matching[0].id.is_empty(), "remote store assigns the id");

    // A second refresh does not duplicate anything.
    let again = service.refresh(&session).await.expect("refresh");
    assert_eq!(again.len(), 1);
}

#[tokio::test]
async fn delete_unknown_id_leaves_collection_unchanged() {
    let service = service();
    let session = Session::new("student-1");

    service
        .create(&session, entry(DayOfWeek::Wednesday, "Biology", "11:00", "12:00"))
        .await
        .expect("create");

    let entries = service.delete(&session, "no-such-id").await.expect("delete");
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn delete_removes_entry_and_refreshes_cache() {
    let service = service();
    let session = Session::new("student-1");

    let entries = service
        .create(&session, entry(DayOfWeek::Thursday, "History", "13:00", "14:00"))
        .await
        .expect("create");
    let id = entries[0].id.clone();

    let remaining = service.delete(&session, &id).await.expect("delete");
    assert!(remaining.is_empty());
    assert!(service.cached().expect("cached").is_empty());
}

#[tokio::test]
async fn rows_are_scoped_to_the_session_user() {
    let store = Arc::new(InMemoryRowStore::new());
    let service = TimetableService::new(store);
    let alice = Session::new("alice");
    let bob = Session::new("bob");

    service
        .create(&alice, entry(DayOfWeek::Monday, "Physics", "09:00", "10:00"))
        .await
        .expect("create");

    let bobs = service.refresh(&bob).await.expect("refresh");
    assert!(bobs.is_empty());

    let alices = service.refresh(&alice).await.expect("refresh");
    assert_eq!(alices.len(), 1);
}

#[tokio::test]
async fn create_with_blank_subject_is_rejected_without_mutation() {
    let service = service();
    let session = Session::new("student-1");

    let result = service
        .create(&session, entry(DayOfWeek::Monday, "  ", "09:00", "10:00"))
        .await;

    assert!(matches!(result, Err(AppError::MissingField("subject"))));
    assert!(service.refresh(&session).await.expect("refresh").is_empty());
}

#[tokio::test]
async fn cache_matches_last_refresh() {
    let service = service();
    let session = Session::new("student-1");

    assert!(service.cached().expect("cached").is_empty());

    service
        .create(&session, entry(DayOfWeek::Saturday, "Revision", "10:00", "12:00"))
        .await
        .expect("create");

    let cached = service.cached().expect("cached");
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].subject, "Revision");
}
