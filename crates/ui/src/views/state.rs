use dioxus::prelude::*;

use api::ApiError;
use cricket_core::model::DraftError;
use services::{QuizServiceError, ResourceServiceError};

/// What a screen shows when an action fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The backend could not be reached or answered with an error status.
    Connection,
    /// The backend answered with something we could not read.
    Malformed,
    /// Form input was rejected before anything was sent.
    Invalid(String),
    Unauthorized,
    NotFound,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::Connection => {
                "Could not reach the server. Please try again.".to_string()
            }
            ViewError::Malformed => {
                "The server sent data we could not read. Please try again later.".to_string()
            }
            ViewError::Invalid(reason) => format!("Please check the form: {reason}."),
            ViewError::Unauthorized => "Please sign in to make changes.".to_string(),
            ViewError::NotFound => {
                "That item no longer exists. The list has been refreshed.".to_string()
            }
            ViewError::Unknown => "Something went wrong. Please try again.".to_string(),
        }
    }

    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, ViewError::Connection | ViewError::Malformed | ViewError::Unknown)
    }
}

impl From<&ApiError> for ViewError {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Transport(_)
            | ApiError::Connection(_)
            | ApiError::Status(_)
            | ApiError::InvalidBaseUrl(_) => ViewError::Connection,
            ApiError::Malformed(_) => ViewError::Malformed,
            ApiError::Unauthorized => ViewError::Unauthorized,
            ApiError::NotFound => ViewError::NotFound,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&DraftError> for ViewError {
    fn from(err: &DraftError) -> Self {
        ViewError::Invalid(err.to_string())
    }
}

impl From<&ResourceServiceError> for ViewError {
    fn from(err: &ResourceServiceError) -> Self {
        match err {
            ResourceServiceError::Invalid(draft) => ViewError::from(draft),
            ResourceServiceError::Api(api) => ViewError::from(api),
            _ => ViewError::Unknown,
        }
    }
}

impl From<&QuizServiceError> for ViewError {
    fn from(err: &QuizServiceError) -> Self {
        match err {
            QuizServiceError::Api(api) => ViewError::from(api),
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
