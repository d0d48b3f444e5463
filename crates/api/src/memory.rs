use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use cricket_core::PageRequest;
use cricket_core::model::{QUIZ_LENGTH, QuizQuestion};

use crate::auth::TokenProvider;
use crate::repository::{ApiError, PageResponse, QuestionSource, ResourceRepository};
use crate::resource::{
    AdminResource, MatchResource, QuestionResource, SeriesResource, VideoResource,
};

/// Rows of one resource plus its id sequence.
#[doc(hidden)]
pub struct Table<R: AdminResource> {
    next_seq: u64,
    rows: Vec<R::Record>,
}

impl<R: AdminResource> Default for Table<R> {
    fn default() -> Self {
        Self {
            next_seq: 1,
            rows: Vec::new(),
        }
    }
}

impl<R: AdminResource> Table<R> {
    fn page(&self, page: PageRequest) -> PageResponse<R::Record> {
        let size = page.size.max(1) as usize;
        let total_items = self.rows.len();
        let total_pages = total_items.div_ceil(size).max(1);
        let items = self
            .rows
            .iter()
            .skip(page.offset())
            .take(size)
            .cloned()
            .collect();
        PageResponse {
            items,
            total_pages: Some(total_pages.to_string()),
            total_items: Some(total_items.to_string()),
        }
    }

    fn insert(&mut self, draft: &R::Draft) -> R::Id {
        let id = R::id_from_seq(self.next_seq);
        self.next_seq += 1;
        self.rows.push(R::materialize(id.clone(), draft));
        id
    }

    fn replace(&mut self, id: &R::Id, draft: &R::Draft) -> Result<(), ApiError> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| R::id_of(row) == *id)
            .ok_or(ApiError::NotFound)?;
        *row = R::materialize(id.clone(), draft);
        Ok(())
    }

    fn remove(&mut self, id: &R::Id) -> Result<(), ApiError> {
        let before = self.rows.len();
        self.rows.retain(|row| R::id_of(row) != *id);
        if self.rows.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

#[doc(hidden)]
#[derive(Default)]
pub struct Tables {
    series: Table<SeriesResource>,
    matches: Table<MatchResource>,
    videos: Table<VideoResource>,
    questions: Table<QuestionResource>,
}

/// Picks the table backing a resource.
pub trait MemoryBacked: AdminResource + Sized {
    #[doc(hidden)]
    fn table(tables: &mut Tables) -> &mut Table<Self>;
}

impl MemoryBacked for SeriesResource {
    fn table(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.series
    }
}

impl MemoryBacked for MatchResource {
    fn table(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.matches
    }
}

impl MemoryBacked for VideoResource {
    fn table(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.videos
    }
}

impl MemoryBacked for QuestionResource {
    fn table(tables: &mut Tables) -> &mut Table<Self> {
        &mut tables.questions
    }
}

/// In-process backend for tests and offline use.
///
/// Mirrors the REST contract: list totals come back as header-style strings
/// and mutations require a bearer token.
#[derive(Clone)]
pub struct InMemoryApi {
    tables: Arc<Mutex<Tables>>,
    tokens: Arc<dyn TokenProvider>,
    batch_size: usize,
}

impl InMemoryApi {
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            tokens,
            batch_size: QUIZ_LENGTH,
        }
    }

    /// Size of the batch handed out by `fetch_random_questions`.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> Result<T, ApiError> {
        let mut guard = self
            .tables
            .lock()
            .map_err(|e| ApiError::Connection(e.to_string()))?;
        Ok(f(&mut guard))
    }

    fn authorize(&self) -> Result<(), ApiError> {
        self.tokens
            .bearer_token()
            .map(|_| ())
            .ok_or(ApiError::Unauthorized)
    }

    /// Insert a record directly, bypassing authorisation. Used for seeding.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the store lock is poisoned.
    pub fn insert<R: MemoryBacked>(&self, draft: &R::Draft) -> Result<R::Id, ApiError> {
        self.with_tables(|tables| R::table(tables).insert(draft))
    }
}

#[async_trait]
impl QuestionSource for InMemoryApi {
    async fn fetch_random_questions(&self) -> Result<Vec<QuizQuestion>, ApiError> {
        let mut pool = self.with_tables(|tables| tables.questions.rows.clone())?;
        pool.shuffle(&mut rand::rng());
        pool.truncate(self.batch_size);
        Ok(pool)
    }
}

#[async_trait]
impl<R: MemoryBacked> ResourceRepository<R> for InMemoryApi {
    async fn list(&self, page: PageRequest) -> Result<PageResponse<R::Record>, ApiError> {
        self.with_tables(|tables| R::table(tables).page(page))
    }

    async fn create(&self, draft: &R::Draft) -> Result<(), ApiError> {
        self.authorize()?;
        self.with_tables(|tables| R::table(tables).insert(draft))?;
        Ok(())
    }

    async fn update(&self, id: &R::Id, draft: &R::Draft) -> Result<(), ApiError> {
        self.authorize()?;
        self.with_tables(|tables| R::table(tables).replace(id, draft))?
    }

    async fn delete(&self, id: &R::Id) -> Result<(), ApiError> {
        self.authorize()?;
        self.with_tables(|tables| R::table(tables).remove(id))?
    }
}
