use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Assignment,
    Class,
    Study,
    Exam,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Assignment
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReminderRequest {
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub category: Category,
}
