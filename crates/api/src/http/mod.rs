use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use url::Url;

use cricket_core::PageRequest;
use cricket_core::model::QuizQuestion;

use crate::auth::TokenProvider;
use crate::repository::{ApiError, PageResponse, QuestionSource, ResourceRepository};
use crate::resource::AdminResource;

mod config;
mod wire;

pub use config::ApiConfig;

/// REST backend speaking JSON over reqwest.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpApi {
    /// Build a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the URL cannot be parsed or cannot
    /// carry path segments.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, ApiError> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url.clone()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            tokens,
        })
    }

    /// `base_url` with `segments` appended as path segments.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.tokens.bearer_token().ok_or(ApiError::Unauthorized)?;
        Ok(request.bearer_auth(token))
    }

    async fn checked(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        log::warn!("{} -> {status}", response.url().path());
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            other => ApiError::Status(other),
        })
    }
}

#[async_trait]
impl QuestionSource for HttpApi {
    async fn fetch_random_questions(&self) -> Result<Vec<QuizQuestion>, ApiError> {
        let url = self.endpoint(&["quiz", "random"])?;
        let response = Self::checked(self.client.get(url).send().await?).await?;
        let body = response.bytes().await?;
        let batch = wire::decode_question_batch(&body)?;
        log::debug!("fetched {} quiz questions", batch.len());
        Ok(batch)
    }
}

#[async_trait]
impl<R: AdminResource> ResourceRepository<R> for HttpApi {
    async fn list(&self, page: PageRequest) -> Result<PageResponse<R::Record>, ApiError> {
        let url = self.endpoint(&[R::PATH])?;
        let request = self
            .client
            .get(url)
            .query(&[("page", page.page), ("size", page.size)]);
        let response = Self::checked(request.send().await?).await?;

        let total_pages = wire::header_value(response.headers(), wire::TOTAL_PAGES_HEADER);
        let total_items = wire::header_value(response.headers(), wire::TOTAL_ITEMS_HEADER);
        let body = response.bytes().await?;
        let items = wire::decode_list::<R::Record>(&body)?;
        log::debug!(
            "{} page {}: {} rows (pages={total_pages:?}, items={total_items:?})",
            R::PATH,
            page.page,
            items.len()
        );

        Ok(PageResponse {
            items,
            total_pages,
            total_items,
        })
    }

    async fn create(&self, draft: &R::Draft) -> Result<(), ApiError> {
        let url = self.endpoint(&[R::PATH])?;
        let request = self.authorized(self.client.post(url))?.json(draft);
        Self::checked(request.send().await?).await?;
        Ok(())
    }

    async fn update(&self, id: &R::Id, draft: &R::Draft) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&[R::PATH, &id])?;
        let request = self.authorized(self.client.put(url))?.json(draft);
        Self::checked(request.send().await?).await?;
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&[R::PATH, &id])?;
        let request = self.authorized(self.client.delete(url))?;
        Self::checked(request.send().await?).await?;
        Ok(())
    }
}
