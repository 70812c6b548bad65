//! Lessons service client — fetches the lesson catalog that seeds exam generation.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lessons service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One lesson record as returned by the lessons service.
/// Only the name is consumed; every other field is ignored.
#[derive(Debug, Deserialize)]
pub struct LessonRecord {
    pub nombre: String,
}

/// Read side of the lessons service. `AppState` holds an
/// `Arc<dyn LessonsCatalog>`, so tests can substitute a fixed catalog.
#[async_trait]
pub trait LessonsCatalog: Send + Sync {
    /// Returns the names of all known lessons.
    async fn lesson_names(&self) -> Result<Vec<String>, LessonsError>;
}

/// HTTP implementation backed by `GET {base_url}/api/leccion`.
#[derive(Clone)]
pub struct HttpLessonsClient {
    client: Client,
    base_url: String,
}

impl HttpLessonsClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl LessonsCatalog for HttpLessonsClient {
    async fn lesson_names(&self) -> Result<Vec<String>, LessonsError> {
        let url = format!("{}/api/leccion", self.base_url.trim_end_matches('/'));
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LessonsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let records: Vec<LessonRecord> = response.json().await?;
        Ok(records.into_iter().map(|r| r.nombre).collect())
    }
}
