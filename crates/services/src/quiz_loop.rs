use std::sync::Arc;

use api::QuestionSource;
use cricket_core::model::QUIZ_LENGTH;
use cricket_core::{QuizError, QuizSession, QuizSummary, SubmitOutcome};

use crate::Clock;
use crate::error::QuizServiceError;

/// Result of submitting the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub session: QuizSession,
    pub outcome: SubmitOutcome,
    /// Present once the submit completed the quiz.
    pub summary: Option<QuizSummary>,
}

/// Orchestrates quiz start, answering and reset against a question source.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    source: Arc<dyn QuestionSource>,
    question_count: usize,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, source: Arc<dyn QuestionSource>) -> Self {
        Self {
            clock,
            source,
            question_count: QUIZ_LENGTH,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: usize) -> Self {
        self.question_count = question_count;
        self
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Fetch a batch and start a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Api` if the question batch cannot be fetched.
    pub async fn start(&self) -> Result<QuizSession, QuizServiceError> {
        self.start_from(&QuizSession::Loading).await
    }

    /// Fetch a batch and start `session`, which must be `Loading` or
    /// `NoQuestions`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session cannot start, or
    /// `QuizServiceError::Api` if the fetch fails.
    pub async fn start_from(&self, session: &QuizSession) -> Result<QuizSession, QuizServiceError> {
        if !session.can_start() {
            return Err(QuizError::InvalidTransition {
                action: "start",
                phase: session.phase(),
            }
            .into());
        }
        let batch = match self.source.fetch_random_questions().await {
            Ok(batch) => batch,
            Err(err) => {
                log::warn!("failed to fetch quiz questions: {err}");
                return Err(err.into());
            }
        };
        log::debug!(
            "starting quiz with {} of {} fetched questions",
            batch.len().min(self.question_count),
            batch.len()
        );
        Ok(session.start(batch, self.question_count)?)
    }

    /// Submit the pending answer of `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless the session is in progress.
    pub fn answer(&self, session: &QuizSession) -> Result<QuizAnswerResult, QuizServiceError> {
        let (session, outcome) = session.submit()?;
        let summary = if outcome.completed {
            Some(QuizSummary::from_session(&session, self.clock.now())?)
        } else {
            None
        };
        Ok(QuizAnswerResult {
            session,
            outcome,
            summary,
        })
    }

    /// Discard `session` and start over with a new batch.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` unless the session is in progress or
    /// completed, or `QuizServiceError::Api` if the new fetch fails. In the
    /// latter case the caller is left in `Loading`.
    pub async fn reset(&self, session: &QuizSession) -> Result<QuizSession, QuizServiceError> {
        let loading = session.reset()?;
        self.start_from(&loading).await
    }

    /// Summary of a completed session, stamped with the service clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is not completed.
    pub fn summarize(&self, session: &QuizSession) -> Result<QuizSummary, QuizServiceError> {
        Ok(QuizSummary::from_session(session, self.clock.now())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;
    use async_trait::async_trait;
    use cricket_core::model::{QuestionId, QuizQuestion};
    use cricket_core::time::fixed_clock;
    use cricket_core::{QuizCue, QuizPhase};
    use std::sync::Mutex;

    struct FakeSource {
        batches: Mutex<Vec<Result<Vec<QuizQuestion>, ApiError>>>,
    }

    impl FakeSource {
        fn new(batches: Vec<Result<Vec<QuizQuestion>, ApiError>>) -> Arc<Self> {
            Arc::new(Self {
                batches: Mutex::new(batches),
            })
        }
    }

    #[async_trait]
    impl QuestionSource for FakeSource {
        async fn fetch_random_questions(&self) -> Result<Vec<QuizQuestion>, ApiError> {
            let mut batches = self.batches.lock().unwrap();
            if batches.is_empty() {
                return Ok(Vec::new());
            }
            batches.remove(0)
        }
    }

    fn questions(count: usize) -> Vec<QuizQuestion> {
        (0..count)
            .map(|n| {
                QuizQuestion::new(
                    QuestionId::new(n.to_string()),
                    format!("Q{n}"),
                    vec!["yes".into(), "no".into()],
                    "yes",
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn start_truncates_to_question_count() {
        let svc = QuizLoopService::new(fixed_clock(), FakeSource::new(vec![Ok(questions(8))]));
        let session = svc.start().await.unwrap();
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.state().unwrap().question_count(), QUIZ_LENGTH);
    }

    #[tokio::test]
    async fn empty_batch_lands_in_no_questions_and_can_retry() {
        let svc = QuizLoopService::new(
            fixed_clock(),
            FakeSource::new(vec![Ok(Vec::new()), Ok(questions(2))]),
        );
        let session = svc.start().await.unwrap();
        assert_eq!(session.phase(), QuizPhase::NoQuestions);

        let retried = svc.start_from(&session).await.unwrap();
        assert_eq!(retried.state().unwrap().question_count(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_is_reported() {
        let svc = QuizLoopService::new(
            fixed_clock(),
            FakeSource::new(vec![Err(ApiError::Connection("offline".into()))]),
        );
        let err = svc.start().await.unwrap_err();
        assert!(matches!(err, QuizServiceError::Api(_)));
    }

    #[tokio::test]
    async fn final_answer_produces_summary_and_cues() {
        let svc = QuizLoopService::new(fixed_clock(), FakeSource::new(vec![Ok(questions(5))]))
            .with_question_count(5);
        let mut session = svc.start().await.unwrap();
        let mut last = None;
        for _ in 0..5 {
            session = session.select_answer("yes").unwrap();
            let answered = svc.answer(&session).unwrap();
            session = answered.session.clone();
            last = Some(answered);
        }

        let last = last.unwrap();
        let summary = last.summary.unwrap();
        assert_eq!(summary.score(), 100);
        assert!(summary.celebrated());
        assert_eq!(summary.completed_at(), fixed_clock().now());
        assert!(last.outcome.cues.contains(&QuizCue::CelebrationEffect));
        assert_eq!(session.phase(), QuizPhase::Completed);
    }

    #[tokio::test]
    async fn reset_is_rejected_while_loading() {
        let svc = QuizLoopService::new(fixed_clock(), FakeSource::new(Vec::new()));
        let err = svc.reset(&QuizSession::Loading).await.unwrap_err();
        assert!(matches!(err, QuizServiceError::Quiz(_)));
    }
}
