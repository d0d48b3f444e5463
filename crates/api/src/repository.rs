use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use cricket_core::PageRequest;
use cricket_core::model::QuizQuestion;

use crate::auth::{MemoryTokenStore, TokenProvider};
use crate::http::{ApiConfig, HttpApi};
use crate::memory::InMemoryApi;
use crate::resource::{
    AdminResource, MatchResource, QuestionResource, SeriesResource, VideoResource,
};

/// Errors surfaced by API backends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response payload: {0}")]
    Malformed(String),

    #[error("not signed in")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// One page of a list endpoint.
///
/// Totals stay as the raw `x-total-pages` / `x-total-elements` header values;
/// interpreting them is the pagination cursor's job.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub total_pages: Option<String>,
    pub total_items: Option<String>,
}

impl<T> PageResponse<T> {
    #[must_use]
    pub fn total_pages(&self) -> Option<&str> {
        self.total_pages.as_deref()
    }

    #[must_use]
    pub fn total_items(&self) -> Option<&str> {
        self.total_items.as_deref()
    }
}

/// Supplies the random question batch for a quiz (`GET /quiz/random`).
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch a batch of questions. Entries are already normalised: missing
    /// fields are empty, never an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the body is not a list.
    async fn fetch_random_questions(&self) -> Result<Vec<QuizQuestion>, ApiError>;
}

/// CRUD contract for one admin resource.
#[async_trait]
pub trait ResourceRepository<R: AdminResource>: Send + Sync {
    /// Fetch one page of records (`GET /<path>?page=&size=`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for transport, status or payload failures.
    async fn list(&self, page: PageRequest) -> Result<PageResponse<R::Record>, ApiError>;

    /// Create a record (`POST /<path>`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unauthorized` without a token, or other API errors.
    async fn create(&self, draft: &R::Draft) -> Result<(), ApiError>;

    /// Replace a record (`PUT /<path>/<id>`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the id is unknown, or other API errors.
    async fn update(&self, id: &R::Id, draft: &R::Draft) -> Result<(), ApiError>;

    /// Remove a record (`DELETE /<path>/<id>`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if the id is unknown, or other API errors.
    async fn delete(&self, id: &R::Id) -> Result<(), ApiError>;
}

/// Aggregates the backend behind trait objects so HTTP and in-memory
/// implementations can be swapped.
#[derive(Clone)]
pub struct Api {
    pub question_source: Arc<dyn QuestionSource>,
    pub series: Arc<dyn ResourceRepository<SeriesResource>>,
    pub matches: Arc<dyn ResourceRepository<MatchResource>>,
    pub videos: Arc<dyn ResourceRepository<VideoResource>>,
    pub questions: Arc<dyn ResourceRepository<QuestionResource>>,
    pub tokens: Arc<MemoryTokenStore>,
}

impl Api {
    /// Empty in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        let tokens = Arc::new(MemoryTokenStore::default());
        Self::from_memory(InMemoryApi::new(tokens.clone()), tokens)
    }

    /// In-memory backend pre-filled with sample content.
    #[must_use]
    pub fn in_memory_seeded() -> Self {
        let tokens = Arc::new(MemoryTokenStore::default());
        let backend = InMemoryApi::new(tokens.clone());
        if let Err(err) = crate::seed::seed(&backend) {
            log::warn!("failed to seed offline content: {err}");
        }
        Self::from_memory(backend, tokens)
    }

    fn from_memory(backend: InMemoryApi, tokens: Arc<MemoryTokenStore>) -> Self {
        let backend = Arc::new(backend);
        Self {
            question_source: backend.clone(),
            series: backend.clone(),
            matches: backend.clone(),
            videos: backend.clone(),
            questions: backend,
            tokens,
        }
    }

    /// Backend talking to the REST API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the configured URL is unusable.
    pub fn http(config: &ApiConfig) -> Result<Self, ApiError> {
        let tokens = Arc::new(MemoryTokenStore::new(config.token.clone()));
        let provider: Arc<dyn TokenProvider> = tokens.clone();
        let backend = Arc::new(HttpApi::new(config, provider)?);
        Ok(Self {
            question_source: backend.clone(),
            series: backend.clone(),
            matches: backend.clone(),
            videos: backend.clone(),
            questions: backend,
            tokens,
        })
    }
}
