pub mod document;
pub mod question;
pub mod reminder;
pub mod study;
pub mod timetable;

pub use document::{Document, Folder};
pub use question::{Question, QuestionHit, QuestionSet};
pub use reminder::{Category, NewReminderRequest, Reminder};
pub use study::{StartSessionRequest, StudySession, StudySummary};
pub use timetable::{DayOfWeek, NewTimetableRequest, TimetableEntry};
