use chrono::{DateTime, Utc};

use crate::quiz::session::{QuizError, QuizSession};
use crate::scoring;

/// Aggregate numbers for a finished quiz, shown on the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    total: usize,
    correct: usize,
    incorrect: usize,
    skipped: usize,
    score: i32,
    max_score: i64,
    celebrated: bool,
    completed_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Summarise a completed session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if the session is not completed.
    pub fn from_session(
        session: &QuizSession,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        let QuizSession::Completed(state) = session else {
            return Err(QuizError::InvalidTransition {
                action: "summarise",
                phase: session.phase(),
            });
        };

        let mut correct = 0_usize;
        let mut incorrect = 0_usize;
        let mut skipped = 0_usize;
        for result in state.results() {
            match result.is_correct() {
                Some(true) => correct += 1,
                Some(false) => incorrect += 1,
                None => skipped += 1,
            }
        }

        let total = state.question_count();
        Ok(Self {
            total,
            correct,
            incorrect,
            skipped,
            score: state.cumulative_score(),
            max_score: scoring::max_score(total),
            celebrated: scoring::meets_celebration_threshold(state.cumulative_score(), total),
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> usize {
        self.incorrect
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn max_score(&self) -> i64 {
        self.max_score
    }

    #[must_use]
    pub fn celebrated(&self) -> bool {
        self.celebrated
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
