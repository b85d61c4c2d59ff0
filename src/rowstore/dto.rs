use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{DayOfWeek, NewTimetableRequest, TimetableEntry};

/// A `timetable` row as stored remotely. Day-of-week travels as its ordinal
/// (Monday = 0) so the remote order-by sorts in calendar order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableRow {
    pub id: String,
    pub user_id: String,
    pub day_of_week: i32,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

impl TimetableRow {
    pub fn into_entry(self) -> Result<TimetableEntry, AppError> {
        Ok(TimetableEntry {
            id: self.id,
            day_of_week: DayOfWeek::from_ordinal(self.day_of_week)?,
            subject: self.subject,
            start_time: self.start_time,
            end_time: self.end_time,
            room: self.room,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTimetableRow {
    pub user_id: String,
    pub day_of_week: i32,
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub room: Option<String>,
}

impl NewTimetableRow {
    pub fn from_request(user_id: &str, req: &NewTimetableRequest) -> Self {
        Self {
            user_id: user_id.to_string(),
            day_of_week: req.day_of_week.ordinal(),
            subject: req.subject.clone(),
            start_time: req.start_time.clone(),
            end_time: req.end_time.clone(),
            room: req.room.clone(),
        }
    }
}
