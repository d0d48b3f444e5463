use cricket_core::{QuizSession, QuizSummary};

use crate::vm::quiz_summary_vm::{QuizSummaryVm, map_quiz_summary};

/// User actions on the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Reset,
    /// Fetch a batch again after `NoQuestions` or a failed fetch.
    Retry,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub progress_label: String,
    pub progress_percent: usize,
    pub score_label: String,
    /// "Skip" until an option is picked.
    pub submit_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Loading,
    NoQuestions,
    Question(QuizQuestionVm),
    Finished(QuizSummaryVm),
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession, summary: Option<&QuizSummary>) -> QuizScreenVm {
    match session {
        QuizSession::Loading => QuizScreenVm::Loading,
        QuizSession::NoQuestions => QuizScreenVm::NoQuestions,
        QuizSession::Completed(state) => match summary {
            Some(summary) => QuizScreenVm::Finished(map_quiz_summary(state, summary)),
            None => QuizScreenVm::Loading,
        },
        QuizSession::InProgress(state) => {
            let Some(question) = state.current_question() else {
                return QuizScreenVm::Loading;
            };
            let selected = state.selected_answer();
            let options = question
                .options()
                .iter()
                .map(|label| QuizOptionVm {
                    label: label.clone(),
                    selected: selected == Some(label.as_str()),
                })
                .collect();
            let total = state.question_count().max(1);
            QuizQuestionVm {
                prompt: question.question().to_string(),
                options,
                progress_label: format!(
                    "Question {} of {}",
                    state.current_index() + 1,
                    state.question_count()
                ),
                progress_percent: state.current_index() * 100 / total,
                score_label: format!("Score: {}", state.cumulative_score()),
                submit_label: if selected.is_some() { "Submit" } else { "Skip" },
            }
            .into()
        }
    }
}

impl From<QuizQuestionVm> for QuizScreenVm {
    fn from(vm: QuizQuestionVm) -> Self {
        QuizScreenVm::Question(vm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cricket_core::model::{QuestionId, QuizQuestion};
    use cricket_core::time::fixed_now;

    fn batch() -> Vec<QuizQuestion> {
        (1..=2)
            .map(|n| {
                QuizQuestion::new(
                    QuestionId::new(n.to_string()),
                    format!("Question {n}?"),
                    vec!["Six".into(), "Four".into()],
                    "Six",
                )
            })
            .collect()
    }

    #[test]
    fn in_progress_screen_tracks_selection() {
        let session = QuizSession::Loading.start(batch(), 5).unwrap();
        let QuizScreenVm::Question(vm) = map_quiz_screen(&session, None) else {
            panic!("expected a question");
        };
        assert_eq!(vm.submit_label, "Skip");
        assert_eq!(vm.progress_label, "Question 1 of 2");
        assert!(vm.options.iter().all(|o| !o.selected));

        let session = session.select_answer("Four").unwrap();
        let QuizScreenVm::Question(vm) = map_quiz_screen(&session, None) else {
            panic!("expected a question");
        };
        assert_eq!(vm.submit_label, "Submit");
        assert!(vm.options[1].selected);
    }

    #[test]
    fn completed_screen_needs_a_summary() {
        let mut session = QuizSession::Loading.start(batch(), 5).unwrap();
        for _ in 0..2 {
            session = session.submit().unwrap().0;
        }
        assert_eq!(map_quiz_screen(&session, None), QuizScreenVm::Loading);

        let summary = QuizSummary::from_session(&session, fixed_now()).unwrap();
        assert!(matches!(
            map_quiz_screen(&session, Some(&summary)),
            QuizScreenVm::Finished(_)
        ));
    }
}
