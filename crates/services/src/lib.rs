#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod quiz_loop;
pub mod resource_service;

pub use cricket_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuizServiceError, ResourceServiceError};
pub use quiz_loop::{QuizAnswerResult, QuizLoopService};
pub use resource_service::ResourceService;
