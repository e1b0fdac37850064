//! The page-sequencing state machine.
//!
//! One engine owns at most one active survey at a time. Pages advance
//! strictly forward through `Title < Question(0) < … < Thanks`; past the
//! thanks page the engine resets to empty, which is the terminal "ended"
//! condition. Every page change renders markup, resolves action buttons and
//! notifies the adapter.

use std::time::Duration;

use log::{debug, trace};
use surveyline_types::{ActionId, PageId, Survey, SurveyError};

use crate::actions;
use crate::adapter::{ActionButton, PresentationAdapter};
use crate::catalog::SurveyCatalog;
use crate::config::TemplateSet;
use crate::template;

/// Identifies one displayed page for the auto-advance race guard.
///
/// A token is captured when a timer is scheduled and compared when it fires;
/// any page change in between makes the token stale. Tokens are only handed
/// out through [`SurveyEngine::auto_advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageToken(u64);

/// A request to schedule a one-shot auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    /// Token to pass back to [`SurveyEngine::advance_if`] when the timer fires.
    pub token: PageToken,

    /// How long to wait before firing.
    pub delay: Duration,
}

/// The survey currently being presented.
#[derive(Debug, Clone)]
struct ActiveSurvey {
    survey: Survey,

    /// `None` means triggered but not yet advanced to the title page.
    page: Option<PageId>,
}

/// The state machine owning the current survey and all transition logic.
///
/// The engine holds the normalized catalog and the template set; the
/// presentation layer is passed into each call, so the engine never owns a
/// UI handle. One engine per mounted survey container, never shared.
#[derive(Debug, Clone)]
pub struct SurveyEngine {
    catalog: SurveyCatalog,
    templates: TemplateSet,
    active: Option<ActiveSurvey>,

    /// Bumped on every page change and on end; the basis for [`PageToken`].
    generation: u64,
}

impl SurveyEngine {
    /// Create an engine over a normalized catalog.
    pub fn new(catalog: SurveyCatalog, templates: TemplateSet) -> Self {
        Self {
            catalog,
            templates,
            active: None,
            generation: 0,
        }
    }

    /// The catalog this engine serves surveys from.
    pub fn catalog(&self) -> &SurveyCatalog {
        &self.catalog
    }

    /// The template set pages are rendered with.
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// The currently displayed page, if a survey is active and started.
    pub fn current_page(&self) -> Option<PageId> {
        self.active.as_ref().and_then(|active| active.page)
    }

    /// The currently active survey.
    pub fn current_survey(&self) -> Option<&Survey> {
        self.active.as_ref().map(|active| &active.survey)
    }

    /// Start presenting a survey.
    ///
    /// Looks the id up in the catalog; an unknown id fails with
    /// `SurveyNotFound` and leaves any existing state untouched. Otherwise
    /// the engine resets to the beginning of that survey and advances once,
    /// so a successful trigger always shows the title page.
    pub fn trigger<A: PresentationAdapter>(
        &mut self,
        survey_id: &str,
        adapter: &mut A,
    ) -> Result<(), SurveyError> {
        let Some(survey) = self.catalog.get(survey_id) else {
            return Err(SurveyError::SurveyNotFound(survey_id.to_string()));
        };

        debug!("triggering survey '{survey_id}'");

        self.active = Some(ActiveSurvey {
            survey: survey.clone(),
            page: None,
        });
        self.generation += 1;

        self.advance(adapter)
    }

    /// Advance to the next page.
    ///
    /// Moving past the thanks page ends the survey. Advancing when no survey
    /// is active (never triggered, or already ended) fails with
    /// `AlreadyEnded`.
    pub fn advance<A: PresentationAdapter>(&mut self, adapter: &mut A) -> Result<(), SurveyError> {
        let (count, current) = match self.active.as_ref() {
            Some(active) => (active.survey.question_count(), active.page),
            None => return Err(SurveyError::AlreadyEnded),
        };

        let next = match current {
            None => PageId::Title,
            Some(PageId::Title) if count > 0 => PageId::Question(0),
            Some(PageId::Title) => PageId::Thanks,
            Some(PageId::Question(index)) if index + 1 < count => PageId::Question(index + 1),
            Some(PageId::Question(_)) => PageId::Thanks,
            Some(PageId::Thanks) => return self.finish(adapter),
        };

        trace!("advancing to {next}");

        if let Some(active) = self.active.as_mut() {
            active.page = Some(next);
        }
        self.generation += 1;

        self.show_page(next, adapter)
    }

    /// End the survey immediately, regardless of the current page.
    ///
    /// Resets the engine to empty and invalidates any outstanding
    /// auto-advance token. Ending an idle engine fails with `AlreadyEnded`.
    pub fn end<A: PresentationAdapter>(&mut self, adapter: &mut A) -> Result<(), SurveyError> {
        self.finish(adapter)
    }

    /// Dispatch a user action coming back from the adapter.
    ///
    /// The action must be one the current page offers, otherwise
    /// `UnknownAction` is reported. `Start`, `Skip` and `Next` advance
    /// (skipping records nothing — it is navigation, not validation);
    /// `Thanks` ends the survey.
    pub fn handle_action<A: PresentationAdapter>(
        &mut self,
        action: ActionId,
        adapter: &mut A,
    ) -> Result<(), SurveyError> {
        let Some(active) = self.active.as_ref() else {
            return Err(SurveyError::UnknownAction { action });
        };
        let Some(page) = active.page else {
            return Err(SurveyError::UnknownAction { action });
        };

        let offered = actions::resolve(page, &active.survey)?;
        if !offered.contains(&action) {
            return Err(SurveyError::UnknownAction { action });
        }

        debug!("handling action '{action}' on {page}");

        match action {
            ActionId::Start | ActionId::Skip | ActionId::Next => self.advance(adapter),
            ActionId::Thanks => self.end(adapter),
        }
    }

    /// The auto-advance timer the adapter should schedule for the current
    /// page, if its data carries a `nextTimer`.
    pub fn auto_advance(&self) -> Option<AutoAdvance> {
        let active = self.active.as_ref()?;
        let delay = match active.page? {
            PageId::Title => active.survey.title_page.next_timer(),
            PageId::Thanks => active.survey.thanks_page.next_timer(),
            PageId::Question(index) => active.survey.question(index)?.next_timer(),
        }?;

        Some(AutoAdvance {
            token: PageToken(self.generation),
            delay,
        })
    }

    /// Advance only if `token` still identifies the displayed page.
    ///
    /// This is the timer-fired entry point. At most one advance wins per
    /// page: if anything changed the page since the token was captured (a
    /// manual action, another timer, `end()`), the token is stale and the
    /// call is a no-op returning `Ok(false)`.
    pub fn advance_if<A: PresentationAdapter>(
        &mut self,
        token: PageToken,
        adapter: &mut A,
    ) -> Result<bool, SurveyError> {
        if token != PageToken(self.generation) {
            trace!("ignoring stale auto-advance {token:?}");
            return Ok(false);
        }

        self.advance(adapter)?;
        Ok(true)
    }

    fn finish<A: PresentationAdapter>(&mut self, adapter: &mut A) -> Result<(), SurveyError> {
        let Some(active) = self.active.take() else {
            return Err(SurveyError::AlreadyEnded);
        };
        self.generation += 1;

        debug!("survey '{}' ended", active.survey.id);

        adapter.on_survey_ended().map_err(SurveyError::adapter)
    }

    fn show_page<A: PresentationAdapter>(
        &self,
        page: PageId,
        adapter: &mut A,
    ) -> Result<(), SurveyError> {
        let Some(active) = self.active.as_ref() else {
            return Err(SurveyError::AlreadyEnded);
        };
        let survey = &active.survey;

        let markup = self.render_page(page, survey)?;
        let offered = actions::resolve(page, survey)?;
        let buttons: Vec<ActionButton> = offered
            .into_iter()
            .map(|id| ActionButton {
                id,
                markup: self.templates.button(id).to_string(),
            })
            .collect();

        adapter
            .on_page_changed(page, &markup, &buttons)
            .map_err(SurveyError::adapter)
    }

    fn render_page(&self, page: PageId, survey: &Survey) -> Result<String, SurveyError> {
        match page {
            PageId::Title => Ok(template::render(
                &self.templates.title_page,
                &survey.title_page.template_fields(),
            )),
            PageId::Thanks => Ok(template::render(
                &self.templates.thanks_page,
                &survey.thanks_page.template_fields(),
            )),
            PageId::Question(index) => {
                let question = survey.question(index).ok_or(SurveyError::InvalidPage {
                    index,
                    count: survey.question_count(),
                })?;
                let template = self
                    .templates
                    .question_template(&question.kind)
                    .ok_or_else(|| {
                        SurveyError::malformed(
                            &survey.id,
                            format!("no template for question kind '{}'", question.kind),
                        )
                    })?;

                Ok(template::render(template, &question.template_fields()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::RecordingAdapter;
    use crate::catalog::CatalogDefaults;
    use serde_json::json;

    fn engine() -> SurveyEngine {
        let raw = json!({
            "two-questions": {
                "titlePage": { "title": "Hi", "body": "Welcome" },
                "thanksPage": { "title": "Bye", "body": "Thanks" },
                "questions": [
                    { "type": "freeresponse", "title": "Q1", "required": true },
                    { "type": "freeresponse", "title": "Q2" }
                ]
            },
            "no-questions": {
                "titlePage": { "title": "Hi", "body": "Welcome" },
                "thanksPage": { "title": "Bye", "body": "Thanks" }
            }
        });
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();
        SurveyEngine::new(catalog, TemplateSet::default())
    }

    #[test]
    fn trigger_shows_title_page() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();

        engine.trigger("two-questions", &mut adapter).unwrap();

        assert_eq!(engine.current_page(), Some(PageId::Title));
        assert_eq!(adapter.pages(), [PageId::Title]);
    }

    #[test]
    fn unknown_id_leaves_state_untouched() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("two-questions", &mut adapter).unwrap();
        engine.advance(&mut adapter).unwrap();

        let err = engine.trigger("missing-id", &mut adapter).unwrap_err();

        assert!(matches!(err, SurveyError::SurveyNotFound(ref id) if id == "missing-id"));
        assert_eq!(engine.current_page(), Some(PageId::Question(0)));
        assert_eq!(engine.current_survey().unwrap().id, "two-questions");
    }

    #[test]
    fn empty_survey_goes_straight_to_thanks() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("no-questions", &mut adapter).unwrap();

        engine.advance(&mut adapter).unwrap();

        assert_eq!(engine.current_page(), Some(PageId::Thanks));
    }

    #[test]
    fn advance_past_thanks_ends() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("no-questions", &mut adapter).unwrap();
        engine.advance(&mut adapter).unwrap();

        engine.advance(&mut adapter).unwrap();

        assert_eq!(engine.current_page(), None);
        assert!(engine.current_survey().is_none());
        assert_eq!(adapter.ended_count(), 1);
    }

    #[test]
    fn advance_when_idle_is_already_ended() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();

        let err = engine.advance(&mut adapter).unwrap_err();
        assert!(err.is_already_ended());
    }

    #[test]
    fn end_from_any_page() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("two-questions", &mut adapter).unwrap();
        engine.advance(&mut adapter).unwrap();

        engine.end(&mut adapter).unwrap();

        assert!(engine.current_survey().is_none());
        assert_eq!(adapter.ended_count(), 1);
    }

    #[test]
    fn action_not_offered_is_rejected() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("two-questions", &mut adapter).unwrap();

        // Title page offers Start only.
        let err = engine
            .handle_action(ActionId::Thanks, &mut adapter)
            .unwrap_err();

        assert!(matches!(
            err,
            SurveyError::UnknownAction {
                action: ActionId::Thanks
            }
        ));
        assert_eq!(engine.current_page(), Some(PageId::Title));
    }

    #[test]
    fn required_question_rejects_skip() {
        let mut engine = engine();
        let mut adapter = RecordingAdapter::new();
        engine.trigger("two-questions", &mut adapter).unwrap();
        engine.handle_action(ActionId::Start, &mut adapter).unwrap();

        let err = engine
            .handle_action(ActionId::Skip, &mut adapter)
            .unwrap_err();

        assert!(matches!(err, SurveyError::UnknownAction { .. }));
        assert_eq!(engine.current_page(), Some(PageId::Question(0)));
    }

    #[test]
    fn unknown_question_kind_fails_at_render() {
        let raw = json!({
            "s1": {
                "titlePage": { "title": "T", "body": "B" },
                "thanksPage": { "title": "T", "body": "B" },
                "questions": [ { "type": "likert", "title": "Q" } ]
            }
        });
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();
        let mut engine = SurveyEngine::new(catalog, TemplateSet::default());
        let mut adapter = RecordingAdapter::new();
        engine.trigger("s1", &mut adapter).unwrap();

        let err = engine.advance(&mut adapter).unwrap_err();

        assert!(matches!(err, SurveyError::MalformedSurvey { ref reason, .. }
            if reason.contains("likert")));
    }
}
