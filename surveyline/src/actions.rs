//! Maps a page to its ordered set of user actions.

use surveyline_types::{ActionId, PageId, Survey, SurveyError};

/// Resolve the action buttons offered on a page, in display order.
///
/// - Title page: `[Start]`
/// - Thanks page: `[Thanks]`
/// - Required question: `[Next]`
/// - Non-required question: `[Skip, Next]`
///
/// A question index outside the survey's question sequence fails with
/// `InvalidPage`.
pub fn resolve(page: PageId, survey: &Survey) -> Result<Vec<ActionId>, SurveyError> {
    match page {
        PageId::Title => Ok(vec![ActionId::Start]),
        PageId::Thanks => Ok(vec![ActionId::Thanks]),
        PageId::Question(index) => {
            let question = survey.question(index).ok_or(SurveyError::InvalidPage {
                index,
                count: survey.question_count(),
            })?;

            if question.required {
                Ok(vec![ActionId::Next])
            } else {
                Ok(vec![ActionId::Skip, ActionId::Next])
            }
        }
    }
}
