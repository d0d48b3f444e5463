use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{QuestionResult, QuizQuestion};
use crate::scoring;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: QuizPhase,
    },
}

//
// ─── PHASE / CUES ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Loading,
    NoQuestions,
    InProgress,
    Completed,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizPhase::Loading => "loading",
            QuizPhase::NoQuestions => "without questions",
            QuizPhase::InProgress => "in progress",
            QuizPhase::Completed => "completed",
        })
    }
}

/// Audio/visual feedback requested by a transition.
///
/// The session only names the cue; playing it belongs to the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCue {
    CorrectTone,
    IncorrectTone,
    CelebrationTone,
    CelebrationEffect,
}

/// What a single `submit` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub result: QuestionResult,
    pub cues: Vec<QuizCue>,
    pub completed: bool,
    /// Set only on the submit that completes the quiz, when the final score
    /// clears the celebration threshold.
    pub celebrate: bool,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Snapshot of a running quiz. Every transition builds a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSessionState {
    questions: Arc<[QuizQuestion]>,
    current_index: usize,
    cumulative_score: i32,
    results: Vec<QuestionResult>,
    completed: bool,
    selected_answer: Option<String>,
}

impl QuizSessionState {
    fn fresh(questions: Arc<[QuizQuestion]>) -> Self {
        Self {
            questions,
            current_index: 0,
            cumulative_score: 0,
            results: Vec::new(),
            completed: false,
            selected_answer: None,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn cumulative_score(&self) -> i32 {
        self.cumulative_score
    }

    #[must_use]
    pub fn results(&self) -> &[QuestionResult] {
        &self.results
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    fn with_selection(&self, choice: String) -> Self {
        Self {
            selected_answer: Some(choice),
            ..self.clone()
        }
    }

    /// Score the pending selection and move to the next question.
    ///
    /// Callers guarantee the state is not completed, so a current question exists.
    fn advanced(&self, question: &QuizQuestion) -> (Self, SubmitOutcome) {
        let result = QuestionResult::record(question.clone(), self.selected_answer.clone());
        let cumulative_score = self.cumulative_score + result.points_awarded();
        let current_index = self.current_index + 1;
        let completed = current_index == self.questions.len();

        let mut results = self.results.clone();
        results.push(result.clone());

        let mut cues = Vec::with_capacity(3);
        match result.is_correct() {
            Some(true) => cues.push(QuizCue::CorrectTone),
            Some(false) => cues.push(QuizCue::IncorrectTone),
            None => {}
        }

        // Evaluated against the tally that already includes this answer.
        let celebrate =
            completed && scoring::meets_celebration_threshold(cumulative_score, self.questions.len());
        if celebrate {
            cues.push(QuizCue::CelebrationTone);
            cues.push(QuizCue::CelebrationEffect);
        }

        let next = Self {
            questions: Arc::clone(&self.questions),
            current_index,
            cumulative_score,
            results,
            completed,
            selected_answer: None,
        };
        let outcome = SubmitOutcome {
            result,
            cues,
            completed,
            celebrate,
        };
        (next, outcome)
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Quiz state machine: `Loading -> InProgress -> Completed`, with `NoQuestions`
/// as a dead end that only accepts a fresh batch.
///
/// Transitions borrow the current value and hand back its replacement, so a
/// rejected transition leaves the caller's session exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizSession {
    #[default]
    Loading,
    NoQuestions,
    InProgress(QuizSessionState),
    Completed(QuizSessionState),
}

impl QuizSession {
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        match self {
            QuizSession::Loading => QuizPhase::Loading,
            QuizSession::NoQuestions => QuizPhase::NoQuestions,
            QuizSession::InProgress(_) => QuizPhase::InProgress,
            QuizSession::Completed(_) => QuizPhase::Completed,
        }
    }

    #[must_use]
    pub fn state(&self) -> Option<&QuizSessionState> {
        match self {
            QuizSession::InProgress(state) | QuizSession::Completed(state) => Some(state),
            QuizSession::Loading | QuizSession::NoQuestions => None,
        }
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        matches!(self, QuizSession::Loading | QuizSession::NoQuestions)
    }

    #[must_use]
    pub fn can_reset(&self) -> bool {
        matches!(self, QuizSession::InProgress(_) | QuizSession::Completed(_))
    }

    fn rejected(&self, action: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            action,
            phase: self.phase(),
        }
    }

    /// Begin a session with a fetched batch, keeping at most `question_count`
    /// questions. An empty batch lands in `NoQuestions`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the session is `Loading`
    /// or `NoQuestions`.
    pub fn start(
        &self,
        mut batch: Vec<QuizQuestion>,
        question_count: usize,
    ) -> Result<Self, QuizError> {
        if !self.can_start() {
            return Err(self.rejected("start"));
        }
        batch.truncate(question_count);
        if batch.is_empty() {
            return Ok(QuizSession::NoQuestions);
        }
        Ok(QuizSession::InProgress(QuizSessionState::fresh(batch.into())))
    }

    /// Record `choice` as the pending answer. Membership in the options is
    /// not checked here.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the session is in progress.
    pub fn select_answer(&self, choice: impl Into<String>) -> Result<Self, QuizError> {
        match self {
            QuizSession::InProgress(state) => {
                Ok(QuizSession::InProgress(state.with_selection(choice.into())))
            }
            _ => Err(self.rejected("select an answer")),
        }
    }

    /// Submit the pending answer (or skip when there is none) and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the session is in progress.
    pub fn submit(&self) -> Result<(Self, SubmitOutcome), QuizError> {
        let QuizSession::InProgress(state) = self else {
            return Err(self.rejected("submit"));
        };
        let Some(question) = state.current_question() else {
            return Err(self.rejected("submit"));
        };

        let (next, outcome) = state.advanced(question);
        let session = if next.is_completed() {
            QuizSession::Completed(next)
        } else {
            QuizSession::InProgress(next)
        };
        Ok((session, outcome))
    }

    /// Throw the current session away and go back to `Loading`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless the session is in progress
    /// or completed.
    pub fn reset(&self) -> Result<Self, QuizError> {
        if !self.can_reset() {
            return Err(self.rejected("reset"));
        }
        Ok(QuizSession::Loading)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
