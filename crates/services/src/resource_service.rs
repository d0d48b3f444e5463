use std::sync::Arc;

use api::{AdminResource, ResourceRepository};
use cricket_core::PaginationController;
use cricket_core::model::Draft;

use crate::error::ResourceServiceError;

/// Upper bound on follow-up fetches after the cursor was clamped.
const MAX_CLAMP_REFETCHES: usize = 2;

/// List and mutate one admin resource.
///
/// Mutations validate their draft before anything is sent. There is no local
/// cache: after a successful mutation the caller refetches the current page.
pub struct ResourceService<R: AdminResource> {
    repo: Arc<dyn ResourceRepository<R>>,
}

impl<R: AdminResource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: AdminResource> ResourceService<R> {
    #[must_use]
    pub fn new(repo: Arc<dyn ResourceRepository<R>>) -> Self {
        Self { repo }
    }

    /// Fetch the page `pager` points at and apply the response totals to it.
    ///
    /// The caller marks the fetch first (`begin_refresh`, `next` or
    /// `previous`). If the totals show the page no longer exists, the cursor
    /// is clamped and the last page is fetched instead. If the total keeps
    /// shrinking past the refetch limit, the page comes back empty rather than
    /// showing rows from a page that no longer exists. On failure the cursor
    /// returns to the last confirmed page.
    ///
    /// # Errors
    ///
    /// Returns `ResourceServiceError::Api` if the list request fails.
    pub async fn load_page(
        &self,
        pager: &mut PaginationController,
    ) -> Result<Vec<R::Record>, ResourceServiceError> {
        let mut refetches = 0;
        loop {
            let request = pager.request();
            let response = match self.repo.list(request).await {
                Ok(response) => response,
                Err(err) => {
                    log::warn!("failed to list {} page {}: {err}", R::PATH, request.page);
                    pager.fetch_failed();
                    return Err(err.into());
                }
            };
            let clamped = pager.set_from_response(response.total_pages(), response.total_items());
            log::debug!(
                "{}: {} of {} items, {}",
                R::PATH,
                response.items.len(),
                pager.total_items(),
                pager.label()
            );
            if !clamped {
                return Ok(response.items);
            }
            if refetches == MAX_CLAMP_REFETCHES {
                // Still shrinking: these rows belong to a page that is gone.
                log::warn!("{} kept shrinking, showing {} empty", R::PATH, pager.label());
                pager.fetch_failed();
                return Ok(Vec::new());
            }
            refetches += 1;
        }
    }

    /// # Errors
    ///
    /// Returns `ResourceServiceError::Invalid` if the draft fails validation,
    /// or `ResourceServiceError::Api` if the backend rejects it.
    pub async fn create(&self, draft: &R::Draft) -> Result<(), ResourceServiceError> {
        draft.validate()?;
        self.repo.create(draft).await.inspect_err(|err| {
            log::warn!("failed to create {}: {err}", R::LABEL);
        })?;
        log::debug!("created {}", R::LABEL);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ResourceServiceError::Invalid` if the draft fails validation,
    /// or `ResourceServiceError::Api` if the backend rejects it.
    pub async fn update(&self, id: &R::Id, draft: &R::Draft) -> Result<(), ResourceServiceError> {
        draft.validate()?;
        self.repo.update(id, draft).await.inspect_err(|err| {
            log::warn!("failed to update {} {id}: {err}", R::LABEL);
        })?;
        log::debug!("updated {} {id}", R::LABEL);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ResourceServiceError::Api` if the backend rejects the request.
    pub async fn delete(&self, id: &R::Id) -> Result<(), ResourceServiceError> {
        self.repo.delete(id).await.inspect_err(|err| {
            log::warn!("failed to delete {} {id}: {err}", R::LABEL);
        })?;
        log::debug!("deleted {} {id}", R::LABEL);
        Ok(())
    }
}
