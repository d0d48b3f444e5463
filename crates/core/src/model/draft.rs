use thiserror::Error;

/// Validation failures for admin form drafts.
///
/// Messages are shown to the user verbatim, so they are phrased for a form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("end date must not be before the start date")]
    DateRange,

    #[error("a match needs two different teams")]
    SameTeams,

    #[error("video URL must be an http(s) link")]
    InvalidUrl,

    #[error("a question needs at least two options")]
    TooFewOptions,

    #[error("options must not be blank")]
    BlankOption,

    #[error("option \"{0}\" is listed twice")]
    DuplicateOption(String),

    #[error("the correct answer must be one of the options")]
    AnswerNotAnOption,
}

/// Create/update payload for an admin record.
pub trait Draft {
    /// Check the draft before it is sent anywhere.
    ///
    /// # Errors
    ///
    /// Returns the first `DraftError` found.
    fn validate(&self) -> Result<(), DraftError>;
}

pub(crate) fn require(value: &str, field: &'static str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::Missing { field });
    }
    Ok(())
}
