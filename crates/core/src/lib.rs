#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod pagination;
pub mod quiz;
pub mod scoring;
pub mod time;

pub use error::Error;
pub use pagination::{PageRequest, PaginationController};
pub use quiz::{QuizCue, QuizError, QuizPhase, QuizSession, QuizSessionState, QuizSummary, SubmitOutcome};
pub use time::Clock;
