use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::{StudySession, StudySummary};

enum TimerState {
    Idle,
    Running {
        subject: Option<String>,
        started_at: DateTime<Utc>,
    },
}

struct Inner {
    state: TimerState,
    completed: Vec<StudySession>,
}

/// Study-session tracker. Starting captures a wall-clock timestamp; ending
/// computes the real elapsed duration and appends it to the session log.
pub struct StudyTracker {
    inner: Mutex<Inner>,
}

impl Default for StudyTracker {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: TimerState::Idle,
                completed: Vec::new(),
            }),
        }
    }
}

impl StudyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, subject: Option<String>) -> Result<(), AppError> {
        self.start_at(subject, Utc::now())
    }

    pub fn start_at(&self, subject: Option<String>, now: DateTime<Utc>) -> Result<(), AppError> {
        let mut inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;

        match inner.state {
            TimerState::Running { .. } => {
                Err(AppError::Conflict("a study session is already running".to_string()))
            }
            TimerState::Idle => {
                inner.state = TimerState::Running {
                    subject,
                    started_at: now,
                };
                Ok(())
            }
        }
    }

    pub fn end(&self) -> Result<StudySession, AppError> {
        self.end_at(Utc::now())
    }

    pub fn end_at(&self, now: DateTime<Utc>) -> Result<StudySession, AppError> {
        let mut inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;

        let (subject, started_at) = match &inner.state {
            TimerState::Idle => {
                return Err(AppError::Conflict("no study session is running".to_string()));
            }
            TimerState::Running { subject, started_at } => (subject.clone(), *started_at),
        };

        let session = StudySession {
            subject,
            started_at: started_at.to_rfc3339(),
            ended_at: now.to_rfc3339(),
            duration_minutes: (now - started_at).num_minutes().max(0),
        };

        inner.state = TimerState::Idle;
        inner.completed.push(session.clone());

        Ok(session)
    }

    pub fn summary(&self) -> Result<StudySummary, AppError> {
        let inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;

        Ok(StudySummary {
            total_minutes: inner.completed.iter().map(|s| s.duration_minutes).sum(),
            session_count: inner.completed.len(),
            running: matches!(inner.state, TimerState::Running { .. }),
        })
    }

    pub fn sessions(&self) -> Result<Vec<StudySession>, AppError> {
        let inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;
        Ok(inner.completed.clone())
    }
}
