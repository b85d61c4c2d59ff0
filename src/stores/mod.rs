pub mod library;
pub mod reminders;
pub mod study;
pub mod timetable;

pub use library::{LibraryIndex, LibraryStore};
pub use reminders::ReminderStore;
pub use study::StudyTracker;
pub use timetable::TimetableService;
