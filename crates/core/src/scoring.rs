//! Point values and the end-of-quiz celebration threshold.
//!
//! Everything here is pure so it can be exercised without a session.

/// Points for picking the correct option.
pub const CORRECT_POINTS: i32 = 20;
/// Points for picking a wrong option.
pub const INCORRECT_POINTS: i32 = -10;
/// Points for submitting without a selection.
pub const SKIP_POINTS: i32 = 0;

/// Celebration fires at 80% of the maximum score, expressed as a fraction
/// so the comparison stays in integers.
const THRESHOLD_NUMERATOR: i64 = 4;
const THRESHOLD_DENOMINATOR: i64 = 5;

/// Points awarded for `selected` against the question's `correct_answer`.
#[must_use]
pub fn score_for(selected: Option<&str>, correct_answer: &str) -> i32 {
    match selected {
        None => SKIP_POINTS,
        Some(choice) if choice == correct_answer => CORRECT_POINTS,
        Some(_) => INCORRECT_POINTS,
    }
}

/// `None` means "not attempted", which is distinct from a wrong answer.
#[must_use]
pub fn is_correct(selected: Option<&str>, correct_answer: &str) -> Option<bool> {
    selected.map(|choice| choice == correct_answer)
}

/// Highest score reachable with `question_count` questions.
#[must_use]
pub fn max_score(question_count: usize) -> i64 {
    i64::try_from(question_count)
        .unwrap_or(i64::MAX / i64::from(CORRECT_POINTS))
        .saturating_mul(i64::from(CORRECT_POINTS))
}

/// True iff `final_score >= 0.8 * question_count * 20`.
#[must_use]
pub fn meets_celebration_threshold(final_score: i32, question_count: usize) -> bool {
    let lhs = i64::from(final_score).saturating_mul(THRESHOLD_DENOMINATOR);
    let rhs = max_score(question_count).saturating_mul(THRESHOLD_NUMERATOR);
    lhs >= rhs
}
