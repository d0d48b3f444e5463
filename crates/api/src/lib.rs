#![forbid(unsafe_code)]

pub mod auth;
pub mod http;
pub mod memory;
pub mod repository;
pub mod resource;
pub mod seed;

pub use auth::{MemoryTokenStore, TokenProvider};
pub use http::{ApiConfig, HttpApi};
pub use memory::InMemoryApi;
pub use repository::{Api, ApiError, PageResponse, QuestionSource, ResourceRepository};
pub use resource::{AdminResource, MatchResource, QuestionResource, SeriesResource, VideoResource};
