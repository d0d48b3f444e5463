use cricket_core::{QuizSessionState, QuizSummary};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultRowVm {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub points_label: String,
    /// CSS modifier: `correct`, `wrong` or `skipped`.
    pub outcome: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSummaryVm {
    pub rows: Vec<QuizResultRowVm>,
    pub score_label: String,
    pub breakdown_label: String,
    pub finished_at_str: String,
    pub celebrate: bool,
}

#[must_use]
pub fn map_quiz_summary(state: &QuizSessionState, summary: &QuizSummary) -> QuizSummaryVm {
    let rows = state
        .results()
        .iter()
        .enumerate()
        .map(|(idx, result)| QuizResultRowVm {
            number: idx + 1,
            question: result.question().question().to_string(),
            your_answer: if result.is_skipped() {
                "Skipped".to_string()
            } else {
                result.user_answer().unwrap_or_default().to_string()
            },
            correct_answer: result.question().correct_answer().to_string(),
            points_label: format_points(result.points_awarded()),
            outcome: match result.is_correct() {
                Some(true) => "correct",
                Some(false) => "wrong",
                None => "skipped",
            },
        })
        .collect();

    QuizSummaryVm {
        rows,
        score_label: format!("{} / {}", summary.score(), summary.max_score()),
        breakdown_label: format!(
            "{} correct, {} wrong, {} skipped",
            summary.correct(),
            summary.incorrect(),
            summary.skipped()
        ),
        finished_at_str: format_datetime(summary.completed_at()),
        celebrate: summary.celebrated(),
    }
}

fn format_points(points: i32) -> String {
    if points > 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
