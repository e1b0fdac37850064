//! # surveyline
//!
//! Present declaratively-defined surveys page by page. Presentation-agnostic.
//!
//! A survey is a title page, an ordered sequence of questions, and a thanks
//! page. The engine walks them linearly under user or timer control; a
//! `PresentationAdapter` (DOM, TUI, test harness, ...) mounts the rendered
//! markup and forwards actions back in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use surveyline::{CatalogDefaults, SurveyCatalog, SurveyEngine, TemplateSet};
//!
//! let catalog = SurveyCatalog::normalize(raw_json, &CatalogDefaults::default())?;
//! let mut engine = SurveyEngine::new(catalog, TemplateSet::default());
//!
//! engine.trigger("exit-feedback", &mut adapter)?;   // shows the title page
//! engine.handle_action(ActionId::Start, &mut adapter)?;
//! // ... adapter forwards clicks via handle_action, timers via advance_if
//! ```
//!
//! ## Lifecycle
//!
//! - `SurveyCatalog::normalize` merges raw survey data against
//!   [`CatalogDefaults`] once, up front; malformed definitions fail there,
//!   not at render time.
//! - `trigger(id)` activates one survey (one at a time per engine) and shows
//!   its title page.
//! - Every page change renders markup through the [`render`] placeholder
//!   substitution (`{{ name }}`), resolves the page's action buttons, and
//!   calls `on_page_changed` on the adapter.
//! - Reaching the end (or an explicit `end()`) resets the engine to empty
//!   and calls `on_survey_ended`.
//!
//! ## Adapters
//!
//! Adapters implement [`PresentationAdapter`]. The crate ships
//! [`RecordingAdapter`] for driving surveys in tests without a UI.

// Re-export all types from surveyline-types
pub use surveyline_types::*;

mod template;
pub use template::{escape, render};

mod actions;
pub use actions::resolve;

mod config;
pub use config::TemplateSet;

mod catalog;
pub use catalog::{CatalogDefaults, SurveyCatalog};

mod adapter;
pub use adapter::{
    ActionButton, AdapterEvent, PresentationAdapter, RecordingAdapter, RecordingAdapterError,
};

mod engine;
pub use engine::{AutoAdvance, PageToken, SurveyEngine};
