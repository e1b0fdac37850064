use crate::ActionId;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The id given to `trigger` is not in the catalog.
    #[error("No survey with id '{0}'")]
    SurveyNotFound(String),

    /// A survey definition failed normalization (missing titlePage or
    /// thanksPage, or a field with the wrong shape), or names a question
    /// kind without a registered template.
    #[error("Malformed survey '{id}': {reason}")]
    MalformedSurvey { id: String, reason: String },

    /// A question index outside the survey's question sequence.
    #[error("Page index {index} is out of range for a survey with {count} questions")]
    InvalidPage { index: usize, count: usize },

    /// An advance was requested but the survey has already ended (or none
    /// is active — the engine resets to empty when a survey ends).
    #[error("Survey already ended")]
    AlreadyEnded,

    /// An action id that the current page does not offer.
    #[error("Action '{action}' is not offered on the current page")]
    UnknownAction { action: ActionId },

    /// Adapter-side failure (mounting, event wiring, etc.)
    #[error("Adapter error: {0}")]
    Adapter(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create an adapter error from any error type.
    pub fn adapter(err: impl Into<anyhow::Error>) -> Self {
        Self::Adapter(err.into())
    }

    /// Create a malformed-survey error.
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSurvey {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error reports an advance past the end of a survey.
    pub fn is_already_ended(&self) -> bool {
        matches!(self, Self::AlreadyEnded)
    }
}
