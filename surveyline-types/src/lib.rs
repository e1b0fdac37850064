//! Core types for the surveyline crate.
//!
//! This crate provides the foundational types for presenting surveys:
//! - `Survey`, `PageContent` and `Question` - Normalized survey definitions
//! - `PageId` - Which page is shown, with a strict total order
//! - `ActionId` - The user-triggerable affordances on a page
//! - `SurveyError` - Error type for all survey operations

mod page;
pub use page::PageId;

mod action;
pub use action::ActionId;

mod survey;
pub use survey::{PageContent, Question, Survey};

mod error;
pub use error::SurveyError;
