use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::draft::{require, Draft, DraftError};
use crate::model::ids::QuestionId;

/// Number of questions played in one quiz session.
pub const QUIZ_LENGTH: usize = 5;

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice quiz question as served by the backend.
///
/// Deserialisation never fails on missing fields: each one falls back to an
/// empty value, so a sparse payload still yields a playable (if odd) question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartialQuestion", rename_all = "camelCase")]
pub struct QuizQuestion {
    id: QuestionId,
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    /// Build a question from a draft and the id assigned by the backend.
    #[must_use]
    pub fn from_draft(id: QuestionId, draft: &QuestionDraft) -> Self {
        Self::new(
            id,
            draft.question.trim(),
            draft.options.iter().map(|o| o.trim().to_string()).collect(),
            draft.correct_answer.trim(),
        )
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }

    /// Draft pre-filled with this question, for the edit form.
    #[must_use]
    pub fn to_draft(&self) -> QuestionDraft {
        QuestionDraft {
            question: self.question.clone(),
            options: self.options.clone(),
            correct_answer: self.correct_answer.clone(),
        }
    }
}

/// Wire shape of a question where every field may be missing.
///
/// Fields are read one at a time: a value of the wrong type only blanks that
/// field. Numbers and booleans are accepted where text is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialQuestion {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<QuestionId>,
    #[serde(deserialize_with = "lenient_text")]
    pub question: Option<String>,
    #[serde(deserialize_with = "lenient_options")]
    pub options: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_text")]
    pub correct_answer: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Mismatch(IgnoredAny),
}

impl<T> Lenient<T> {
    fn ok(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Mismatch(_) => None,
        }
    }
}

/// A scalar shown as text: strings as-is, numbers and booleans formatted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Lenient::<T>::deserialize(deserializer)?.ok())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient::<D, Scalar>(deserializer)?.map(String::from))
}

// Entries that are not scalars (objects, nested lists, null) are dropped.
fn lenient_options<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = lenient::<D, Vec<Lenient<Scalar>>>(deserializer)?;
    Ok(entries.map(|entries| {
        entries
            .into_iter()
            .filter_map(Lenient::ok)
            .map(String::from)
            .collect()
    }))
}

impl From<PartialQuestion> for QuizQuestion {
    fn from(partial: PartialQuestion) -> Self {
        Self {
            id: partial.id.unwrap_or_default(),
            question: partial.question.unwrap_or_default(),
            options: partial.options.unwrap_or_default(),
            correct_answer: partial.correct_answer.unwrap_or_default(),
        }
    }
}

//
// ─── DRAFT ────────────────────────────────────────────────────────────────────
//

/// Admin form payload for creating or editing a quiz question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Draft for QuestionDraft {
    fn validate(&self) -> Result<(), DraftError> {
        require(&self.question, "question")?;
        if self.options.len() < 2 {
            return Err(DraftError::TooFewOptions);
        }
        let mut seen: Vec<&str> = Vec::with_capacity(self.options.len());
        for option in &self.options {
            let option = option.trim();
            if option.is_empty() {
                return Err(DraftError::BlankOption);
            }
            if seen.contains(&option) {
                return Err(DraftError::DuplicateOption(option.to_string()));
            }
            seen.push(option);
        }
        require(&self.correct_answer, "correct answer")?;
        if !seen.contains(&self.correct_answer.trim()) {
            return Err(DraftError::AnswerNotAnOption);
        }
        Ok(())
    }
}
