use std::sync::Arc;

use crate::question_bank::QuestionBank;
use crate::rowstore::RowStore;
use crate::stores::{LibraryStore, ReminderStore, StudyTracker, TimetableService};

#[derive(Clone)]
pub struct AppState {
    pub reminders: Arc<ReminderStore>,
    pub timetable: Arc<TimetableService>,
    pub question_bank: Arc<QuestionBank>,
    pub study: Arc<StudyTracker>,
    pub library: Arc<LibraryStore>,
}

impl AppState {
    pub fn new(question_bank: QuestionBank, row_store: Arc<dyn RowStore>) -> Self {
        Self {
            reminders: Arc::new(ReminderStore::new()),
            timetable: Arc::new(TimetableService::new(row_store)),
            question_bank: Arc::new(question_bank),
            study: Arc::new(StudyTracker::new()),
            library: Arc::new(LibraryStore::new()),
        }
    }
}
