pub mod dto;

use std::env;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{NewTimetableRequest, TimetableEntry};
use crate::session::Session;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct RowStoreConfig {
    pub base_url: String,
    pub api_key: String,
}

impl RowStoreConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        let base_url = env::var("ROWSTORE_URL")
            .map_err(|_| AppError::Fetch("ROWSTORE_URL is not set".to_string()))?;
        let api_key = env::var("ROWSTORE_API_KEY")
            .map_err(|_| AppError::Fetch("ROWSTORE_API_KEY is not set".to_string()))?;

        Ok(Self { base_url, api_key })
    }
}

/// The remote row-store collaborator. All operations are scoped to the
/// calling user's session; rows of other users are never visible.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Select the user's timetable rows ordered by (day-of-week, start time)
    /// ascending. The caller relies on this order and never re-sorts.
    async fn select_timetable(&self, session: &Session) -> Result<Vec<TimetableEntry>, AppError>;
    async fn insert_timetable(
        &self,
        session: &Session,
        req: &NewTimetableRequest,
    ) -> Result<TimetableEntry, AppError>;
    /// Delete by identifier. Unknown identifiers are a no-op.
    async fn delete_timetable(&self, session: &Session, id: &str) -> Result<(), AppError>;
}

/// HTTP implementation speaking PostgREST-style conventions.
pub struct RestRowStore {
    client: Client,
    config: RowStoreConfig,
}

impl RestRowStore {
    pub fn new(config: RowStoreConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Remote(format!("failed to build http client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/timetable", self.config.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }

    /// Send with one retry on transport-level failure (timeout or failed
    /// connect). Non-2xx responses are not retried.
    async fn send_with_retry(&self, req: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let retry = req.try_clone();

        match req.send().await {
            Ok(resp) => Ok(resp),
            Err(first) if first.is_timeout() || first.is_connect() => {
                tracing::warn!("row store request failed, retrying once: {}", first);
                match retry {
                    Some(req) => Ok(req.send().await?),
                    None => Err(first.into()),
                }
            }
            Err(other) => Err(other.into()),
        }
    }

    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!("row store error {}: {}", status, body)));
        }
        Ok(resp)
    }
}

#[async_trait]
impl RowStore for RestRowStore {
    async fn select_timetable(&self, session: &Session) -> Result<Vec<TimetableEntry>, AppError> {
        let req = self
            .client
            .get(self.table_url())
            .query(&[
                ("user_id", format!("eq.{}", session.user_id).as_str()),
                ("select", "*"),
                ("order", "day_of_week.asc,start_time.asc"),
            ]);

        let resp = Self::check_status(self.send_with_retry(self.authorize(req)).await?).await?;
        let rows: Vec<dto::TimetableRow> = resp.json().await?;

        rows.into_iter().map(dto::TimetableRow::into_entry).collect()
    }

    async fn insert_timetable(
        &self,
        session: &Session,
        req: &NewTimetableRequest,
    ) -> Result<TimetableEntry, AppError> {
        let row = dto::NewTimetableRow::from_request(&session.user_id, req);
        let request = self
            .client
            .post(self.table_url())
            .header("Prefer", "return=representation")
            .json(&row);

        let resp = Self::check_status(self.send_with_retry(self.authorize(request)).await?).await?;
        let mut rows: Vec<dto::TimetableRow> = resp.json().await?;

        match rows.pop() {
            Some(row) => row.into_entry(),
            None => Err(AppError::Remote("insert returned no row".to_string())),
        }
    }

    async fn delete_timetable(&self, session: &Session, id: &str) -> Result<(), AppError> {
        let req = self
            .client
            .delete(self.table_url())
            .query(&[
                ("id", format!("eq.{}", id).as_str()),
                ("user_id", format!("eq.{}", session.user_id).as_str()),
            ]);

        Self::check_status(self.send_with_retry(self.authorize(req)).await?).await?;
        Ok(())
    }
}

/// In-process implementation used when no remote store is configured, and as
/// the test double. Honours the same ordering contract as the REST store.
#[derive(Default)]
pub struct InMemoryRowStore {
    rows: Mutex<Vec<dto::TimetableRow>>,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn select_timetable(&self, session: &Session) -> Result<Vec<TimetableEntry>, AppError> {
        let rows = self.rows.lock().map_err(|_| AppError::InternalServerError)?;

        let mut mine: Vec<dto::TimetableRow> = rows
            .iter()
            .filter(|r| r.user_id == session.user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| {
            (a.day_of_week, a.start_time.as_str()).cmp(&(b.day_of_week, b.start_time.as_str()))
        });

        mine.into_iter().map(dto::TimetableRow::into_entry).collect()
    }

    async fn insert_timetable(
        &self,
        session: &Session,
        req: &NewTimetableRequest,
    ) -> Result<TimetableEntry, AppError> {
        let new = dto::NewTimetableRow::from_request(&session.user_id, req);
        let row = dto::TimetableRow {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            day_of_week: new.day_of_week,
            subject: new.subject,
            start_time: new.start_time,
            end_time: new.end_time,
            room: new.room,
        };

        let mut rows = self.rows.lock().map_err(|_| AppError::InternalServerError)?;
        rows.push(row.clone());

        row.into_entry()
    }

    async fn delete_timetable(&self, session: &Session, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.lock().map_err(|_| AppError::InternalServerError)?;
        rows.retain(|r| !(r.id == id && r.user_id == session.user_id));
        Ok(())
    }
}
