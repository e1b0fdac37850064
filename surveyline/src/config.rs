//! Markup template configuration.

use std::collections::BTreeMap;

use surveyline_types::ActionId;

/// Default markup for the survey container element.
///
/// The engine itself never mounts this; it is configuration for adapters,
/// which place rendered page markup in `.svl-content` and action buttons
/// in `.svl-actionbar`.
const CONTAINER: &str =
    "<div class='svl-container'><div class='svl-content'></div><div class='svl-actionbar'></div></div>";

const TITLE_PAGE: &str =
    "<div class='svl-titlepage'><h2 class='svl-title'>{{ title }}</h2><p class='svl-body'>{{ body }}</p></div>";

const THANKS_PAGE: &str =
    "<div class='svl-titlepage'><h2 class='svl-title'>{{ title }}</h2><p class='svl-body'>{{ body }}</p></div>";

const FREE_RESPONSE: &str = "<div class='svl-question freeresponse'><h2 class='svl-title'>{{ title }}</h2><p class='svl-subtitle'>{{ subtitle }}</p><textarea name='{{ id }}' placeholder='{{ placeholder }}'></textarea></div>";

const START_BUTTON: &str = "<button class='svl-btn start'>Start</button>";
const THANKS_BUTTON: &str = "<button class='svl-btn thanks'>Thanks</button>";
const NEXT_BUTTON: &str = "<button class='svl-btn next'>Next</button>";
const SKIP_BUTTON: &str = "<button class='svl-btn skip'>Skip</button>";

/// The markup templates a survey engine renders pages with.
///
/// Every field is enumerated here rather than merged from loose options;
/// instance-provided templates override the built-in defaults, nothing else
/// is consulted. Placeholders use the `{{ name }}` syntax understood by
/// [`crate::render`].
#[derive(Debug, Clone)]
pub struct TemplateSet {
    /// Outer container markup, for adapters to mount.
    pub container: String,

    /// Template for the title page.
    pub title_page: String,

    /// Template for the thanks page.
    pub thanks_page: String,

    /// Per-question-kind templates, keyed by the question's `type` string.
    pub questions: BTreeMap<String, String>,

    /// Button markup for the `start` action.
    pub start_button: String,

    /// Button markup for the `skip` action.
    pub skip_button: String,

    /// Button markup for the `next` action.
    pub next_button: String,

    /// Button markup for the `thanks` action.
    pub thanks_button: String,
}

impl TemplateSet {
    /// Create the built-in template set.
    pub fn new() -> Self {
        let mut questions = BTreeMap::new();
        questions.insert("freeresponse".to_string(), FREE_RESPONSE.to_string());

        Self {
            container: CONTAINER.to_string(),
            title_page: TITLE_PAGE.to_string(),
            thanks_page: THANKS_PAGE.to_string(),
            questions,
            start_button: START_BUTTON.to_string(),
            skip_button: SKIP_BUTTON.to_string(),
            next_button: NEXT_BUTTON.to_string(),
            thanks_button: THANKS_BUTTON.to_string(),
        }
    }

    /// Override the title page template.
    pub fn with_title_page(mut self, template: impl Into<String>) -> Self {
        self.title_page = template.into();
        self
    }

    /// Override the thanks page template.
    pub fn with_thanks_page(mut self, template: impl Into<String>) -> Self {
        self.thanks_page = template.into();
        self
    }

    /// Register (or override) the template for a question kind.
    pub fn with_question(mut self, kind: impl Into<String>, template: impl Into<String>) -> Self {
        self.questions.insert(kind.into(), template.into());
        self
    }

    /// Override the button markup for an action.
    pub fn with_button(mut self, action: ActionId, template: impl Into<String>) -> Self {
        match action {
            ActionId::Start => self.start_button = template.into(),
            ActionId::Skip => self.skip_button = template.into(),
            ActionId::Next => self.next_button = template.into(),
            ActionId::Thanks => self.thanks_button = template.into(),
        }
        self
    }

    /// The template registered for a question kind, if any.
    pub fn question_template(&self, kind: &str) -> Option<&str> {
        self.questions.get(kind).map(String::as_str)
    }

    /// The button markup for an action.
    pub fn button(&self, action: ActionId) -> &str {
        match action {
            ActionId::Start => &self.start_button,
            ActionId::Skip => &self.skip_button,
            ActionId::Next => &self.next_button,
            ActionId::Thanks => &self.thanks_button,
        }
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_freeresponse() {
        let templates = TemplateSet::new();
        assert!(templates.question_template("freeresponse").is_some());
        assert!(templates.question_template("likert").is_none());
    }

    #[test]
    fn overrides_win() {
        let templates = TemplateSet::new()
            .with_title_page("<h1>{{ title }}</h1>")
            .with_question("likert", "<div class='likert'>{{ title }}</div>")
            .with_button(ActionId::Next, "<a class='next'>→</a>");

        assert_eq!(templates.title_page, "<h1>{{ title }}</h1>");
        assert_eq!(
            templates.question_template("likert"),
            Some("<div class='likert'>{{ title }}</div>")
        );
        assert_eq!(templates.button(ActionId::Next), "<a class='next'>→</a>");
        // untouched defaults remain
        assert_eq!(templates.button(ActionId::Start), START_BUTTON);
    }
}
