use std::sync::Arc;
use std::sync::Mutex;

use tracing::info;

use crate::error::AppError;
use crate::models::{NewTimetableRequest, TimetableEntry};
use crate::rowstore::RowStore;
use crate::session::Session;

/// Timetable view over the remote row store. The remote relation is the
/// source of truth; the local cache is a projection replaced wholesale on
/// every refresh, never merged incrementally.
pub struct TimetableService {
    store: Arc<dyn RowStore>,
    cache: Mutex<Vec<TimetableEntry>>,
}

impl TimetableService {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self {
            store,
            cache: Mutex::new(Vec::new()),
        }
    }

    pub fn cached(&self) -> Result<Vec<TimetableEntry>, AppError> {
        let cache = self.cache.lock().map_err(|_| AppError::InternalServerError)?;
        Ok(cache.clone())
    }

    /// Re-read the remote relation, ordered by (day-of-week, start time),
    /// and replace the cache with the result.
    pub async fn refresh(&self, session: &Session) -> Result<Vec<TimetableEntry>, AppError> {
        let entries = self.store.select_timetable(session).await?;

        let mut cache = self.cache.lock().map_err(|_| AppError::InternalServerError)?;
        *cache = entries.clone();

        Ok(entries)
    }

    /// Insert remotely, then refresh. The returned list is the post-insert
    /// remote state, not an optimistic local merge.
    pub async fn create(
        &self,
        session: &Session,
        req: NewTimetableRequest,
    ) -> Result<Vec<TimetableEntry>, AppError> {
        if req.subject.trim().is_empty() {
            return Err(AppError::MissingField("subject"));
        }
        if req.start_time.trim().is_empty() {
            return Err(AppError::MissingField("start_time"));
        }
        if req.end_time.trim().is_empty() {
            return Err(AppError::MissingField("end_time"));
        }

        let created = self.store.insert_timetable(session, &req).await?;
        info!("created timetable entry {} for {}", created.id, session.user_id);

        self.refresh(session).await
    }

    /// Delete remotely, then refresh. Deleting an unknown id changes
    /// nothing.
    pub async fn delete(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<Vec<TimetableEntry>, AppError> {
        self.store.delete_timetable(session, id).await?;
        self.refresh(session).await
    }
}
