/// Identifies the page of a survey currently shown to the respondent.
///
/// The derived `Ord` gives the presentation order:
/// `Title < Question(0) < … < Question(n - 1) < Thanks`.
/// The engine only ever moves forward through this order; the terminal
/// "ended" condition is the absence of a page, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageId {
    /// The introductory page shown when a survey is triggered.
    Title,

    /// The question at the given index in the survey's question sequence.
    Question(usize),

    /// The closing page shown after the last question (or right after the
    /// title page when a survey has no questions).
    Thanks,
}

impl PageId {
    /// Check if this is a question page.
    pub fn is_question(&self) -> bool {
        matches!(self, Self::Question(_))
    }

    /// Get the question index, if this is a question page.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::Question(index) => Some(*index),
            _ => None,
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "titlePage"),
            Self::Question(index) => write!(f, "question[{index}]"),
            Self::Thanks => write!(f, "thanksPage"),
        }
    }
}
