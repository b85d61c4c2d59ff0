use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct StudySession {
    pub subject: Option<String>,
    pub started_at: String,
    pub ended_at: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub total_minutes: i64,
    pub session_count: usize,
    pub running: bool,
}
