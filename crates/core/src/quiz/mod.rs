mod session;
mod summary;

pub use session::{QuizCue, QuizError, QuizPhase, QuizSession, QuizSessionState, SubmitOutcome};
pub use summary::QuizSummary;
