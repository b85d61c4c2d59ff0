use axum::Json;
use axum::extract::{Path, Query};
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::*;
use crate::question_bank::FilterCriteria;
use crate::session::Session;
use crate::state::AppState;
use crate::stores::LibraryIndex;

#[derive(Deserialize, Default)]
struct QuestionQueryParams {
    #[serde(default)]
    course: Option<String>,
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    marks: Option<String>,
}

impl QuestionQueryParams {
    /// Empty strings and the "All" sentinel mean "no constraint". The
    /// numeric fields come from fixed selectors, so anything unparseable is
    /// treated the same way.
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            course: self
                .course
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty() && c != "All"),
            module: self.module.and_then(|m| m.trim().parse().ok()),
            mark_weightage: self.marks.and_then(|m| m.trim().parse().ok()),
        }
    }
}

#[derive(Deserialize, Default)]
struct LibrarySearchParams {
    #[serde(default)]
    q: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/reminders", get(list_reminders).post(create_reminder))
        .route("/reminders/{id}", delete(delete_reminder))
        .route("/timetable", get(list_timetable).post(create_timetable))
        .route("/timetable/{id}", delete(delete_timetable))
        .route("/questions", get(search_questions))
        .route("/questions/courses", get(list_courses))
        .route("/study/start", post(start_study))
        .route("/study/end", post(end_study))
        .route("/study/summary", get(study_summary))
        .route("/study/sessions", get(study_sessions))
        .route("/library", get(library_index))
        .route("/library/search", get(library_search))
        .route("/homework-help/chat", post(homework_chat))
        .route("/tools/summarize", post(summarize_ppt))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_reminders(State(state): State<AppState>) -> Result<Json<Vec<Reminder>>, AppError> {
    Ok(Json(state.reminders.list()?))
}

async fn create_reminder(
    State(state): State<AppState>,
    Json(req): Json<NewReminderRequest>,
) -> Result<Json<Reminder>, AppError> {
    let reminder = state.reminders.add(req)?;
    Ok(Json(reminder))
}

async fn delete_reminder(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.reminders.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_timetable(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let entries = state.timetable.refresh(&session).await?;
    Ok(Json(entries))
}

async fn create_timetable(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<NewTimetableRequest>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let entries = state.timetable.create(&session, req).await?;
    Ok(Json(entries))
}

async fn delete_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Json<Vec<TimetableEntry>>, AppError> {
    let entries = state.timetable.delete(&session, &id).await?;
    Ok(Json(entries))
}

async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionQueryParams>,
) -> Json<Vec<QuestionHit>> {
    Json(state.question_bank.filter(&params.into_criteria()))
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.question_bank.courses())
}

async fn start_study(
    State(state): State<AppState>,
    Json(req): Json<StartSessionRequest>,
) -> Result<StatusCode, AppError> {
    state.study.start(req.subject)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn end_study(State(state): State<AppState>) -> Result<Json<StudySession>, AppError> {
    let session = state.study.end()?;
    Ok(Json(session))
}

async fn study_summary(State(state): State<AppState>) -> Result<Json<StudySummary>, AppError> {
    Ok(Json(state.study.summary()?))
}

async fn study_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudySession>>, AppError> {
    Ok(Json(state.study.sessions()?))
}

async fn library_index(State(state): State<AppState>) -> Json<LibraryIndex> {
    Json(state.library.index())
}

async fn library_search(
    State(state): State<AppState>,
    Query(params): Query<LibrarySearchParams>,
) -> Json<Vec<Document>> {
    Json(state.library.search(&params.q))
}

// The AI homework chat and PPT summarizer are external collaborators that
// have not been wired up yet.

async fn homework_chat() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

async fn summarize_ppt() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
