//! Shared error types for the services crate.

use thiserror::Error;

use api::ApiError;
use cricket_core::QuizError;
use cricket_core::model::DraftError;

/// Errors emitted by `QuizLoopService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `ResourceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResourceServiceError {
    #[error(transparent)]
    Invalid(#[from] DraftError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ResourceServiceError {
    /// The backend refused the request for lack of a valid token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ResourceServiceError::Api(ApiError::Unauthorized))
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Api(#[from] ApiError),
}
