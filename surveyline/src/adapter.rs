//! The presentation seam: how the engine talks to whatever mounts it.
//!
//! The engine never touches a DOM or terminal. On every page change it hands
//! the adapter the page id, the rendered markup, and the resolved action
//! buttons; the adapter replaces mounted content and rebinds each button's
//! click handler to `engine.handle_action(button.id)`. When the survey ends
//! the adapter unmounts the container.
//!
//! `RecordingAdapter` drives surveys in tests without any UI.

use surveyline_types::{ActionId, PageId};

/// A resolved action together with its rendered button markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Which action this button triggers.
    pub id: ActionId,

    /// The button markup, rendered from the configured template.
    pub markup: String,
}

/// Trait for presentation layers that mount a survey.
///
/// One adapter instance owns one survey container; adapters and engines are
/// never shared between containers. Adapter failures propagate out of the
/// engine call that caused them as `SurveyError::Adapter`.
pub trait PresentationAdapter {
    /// The error type for this adapter.
    type Error: Into<anyhow::Error>;

    /// A new page is showing. Replace the mounted content with `markup` and
    /// bind a click handler for each of `buttons`.
    fn on_page_changed(
        &mut self,
        page: PageId,
        markup: &str,
        buttons: &[ActionButton],
    ) -> Result<(), Self::Error>;

    /// The survey ended. Unmount the survey container.
    fn on_survey_ended(&mut self) -> Result<(), Self::Error>;
}

/// Everything an adapter can observe, for asserting on in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    /// `on_page_changed` was called.
    PageChanged {
        page: PageId,
        markup: String,
        actions: Vec<ActionId>,
    },

    /// `on_survey_ended` was called.
    SurveyEnded,
}

/// Error type for RecordingAdapter.
#[derive(Debug, thiserror::Error)]
pub enum RecordingAdapterError {
    /// The adapter was told to refuse the next callback.
    #[error("adapter refused: {0}")]
    Refused(String),
}

/// An adapter that records every callback in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingAdapter {
    events: Vec<AdapterEvent>,
    refuse_next: Option<String>,
}

impl RecordingAdapter {
    /// Create a new empty recording adapter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next callback fail with the given message, for testing how
    /// adapter failures propagate out of engine calls.
    pub fn refuse_next(&mut self, message: impl Into<String>) {
        self.refuse_next = Some(message.into());
    }

    /// All recorded events, in order.
    pub fn events(&self) -> &[AdapterEvent] {
        &self.events
    }

    /// The pages shown so far, in order.
    pub fn pages(&self) -> Vec<PageId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                AdapterEvent::PageChanged { page, .. } => Some(*page),
                AdapterEvent::SurveyEnded => None,
            })
            .collect()
    }

    /// The most recent page-changed event, if any.
    pub fn last_page(&self) -> Option<&AdapterEvent> {
        self.events
            .iter()
            .rev()
            .find(|event| matches!(event, AdapterEvent::PageChanged { .. }))
    }

    /// How many times the survey ended.
    pub fn ended_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, AdapterEvent::SurveyEnded))
            .count()
    }

    /// Clear the recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl PresentationAdapter for RecordingAdapter {
    type Error = RecordingAdapterError;

    fn on_page_changed(
        &mut self,
        page: PageId,
        markup: &str,
        buttons: &[ActionButton],
    ) -> Result<(), Self::Error> {
        if let Some(message) = self.refuse_next.take() {
            return Err(RecordingAdapterError::Refused(message));
        }
        self.events.push(AdapterEvent::PageChanged {
            page,
            markup: markup.to_string(),
            actions: buttons.iter().map(|button| button.id).collect(),
        });
        Ok(())
    }

    fn on_survey_ended(&mut self) -> Result<(), Self::Error> {
        if let Some(message) = self.refuse_next.take() {
            return Err(RecordingAdapterError::Refused(message));
        }
        self.events.push(AdapterEvent::SurveyEnded);
        Ok(())
    }
}
