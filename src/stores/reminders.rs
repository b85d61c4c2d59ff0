use std::sync::Mutex;

use chrono::Utc;

use crate::error::AppError;
use crate::models::{NewReminderRequest, Reminder};

#[derive(Default)]
struct Inner {
    items: Vec<Reminder>,
    last_id: i64,
}

/// In-memory reminder list. Insertion order is display order; nothing is
/// persisted across restarts.
#[derive(Default)]
pub struct ReminderStore {
    inner: Mutex<Inner>,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Result<Vec<Reminder>, AppError> {
        let inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;
        Ok(inner.items.clone())
    }

    /// Validate and append. Title, date, and time are all required; a
    /// rejected add leaves the list untouched.
    pub fn add(&self, req: NewReminderRequest) -> Result<Reminder, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::MissingField("title"));
        }
        if req.date.trim().is_empty() {
            return Err(AppError::MissingField("date"));
        }
        if req.time.trim().is_empty() {
            return Err(AppError::MissingField("time"));
        }

        let mut inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;

        // Millisecond timestamp, bumped past the previous id so two adds in
        // the same millisecond stay distinct and monotonic.
        let id = Utc::now().timestamp_millis().max(inner.last_id + 1);
        inner.last_id = id;

        let reminder = Reminder {
            id,
            title: req.title,
            date: req.date,
            time: req.time,
            category: req.category,
        };
        inner.items.push(reminder.clone());

        Ok(reminder)
    }

    /// Remove by identifier. An unknown identifier is a no-op.
    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        let mut inner = self.inner.lock().map_err(|_| AppError::InternalServerError)?;
        inner.items.retain(|r| r.id != id);
        Ok(())
    }
}
