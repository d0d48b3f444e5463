use crate::model::question::QuizQuestion;
use crate::scoring;

/// Outcome recorded for one question once the player submits or skips it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionResult {
    question: QuizQuestion,
    user_answer: Option<String>,
    is_correct: Option<bool>,
    points_awarded: i32,
}

impl QuestionResult {
    /// Score `user_answer` against `question` and freeze the outcome.
    #[must_use]
    pub fn record(question: QuizQuestion, user_answer: Option<String>) -> Self {
        let selected = user_answer.as_deref();
        let is_correct = scoring::is_correct(selected, question.correct_answer());
        let points_awarded = scoring::score_for(selected, question.correct_answer());
        Self {
            question,
            user_answer,
            is_correct,
            points_awarded,
        }
    }

    #[must_use]
    pub fn question(&self) -> &QuizQuestion {
        &self.question
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<&str> {
        self.user_answer.as_deref()
    }

    /// `None` when the question was skipped.
    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.is_correct.is_none()
    }

    #[must_use]
    pub fn points_awarded(&self) -> i32 {
        self.points_awarded
    }
}
