use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete, normalized survey: a title page, an ordered sequence of
/// questions, and a thanks page.
///
/// Surveys are constructed once at normalization time and are read-only
/// thereafter. The wire shape uses camelCase keys (`titlePage`,
/// `thanksPage`, `nextTimer`) matching the JSON survey data format; fields
/// the schema does not know about are preserved in `extra` unexamined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    /// The survey's id in the catalog. Filled in during normalization from
    /// the data-set key; not expected inside the definition itself.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// The introductory page.
    pub title_page: PageContent,

    /// The closing page.
    pub thanks_page: PageContent,

    /// The questions, in presentation order. May be empty, in which case
    /// the title page advances straight to the thanks page.
    #[serde(default)]
    pub questions: Vec<Question>,

    /// Unknown fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Survey {
    /// Get the question at the given index.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Get the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// The content of a title or thanks page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    /// The page heading.
    #[serde(default)]
    pub title: String,

    /// The page body text.
    #[serde(default)]
    pub body: String,

    /// Delay in milliseconds after which the page auto-advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_timer: Option<u64>,

    /// Unknown fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageContent {
    /// The auto-advance delay, if this page carries one.
    pub fn next_timer(&self) -> Option<Duration> {
        self.next_timer.map(Duration::from_millis)
    }

    /// The fields available for placeholder substitution on this page.
    pub fn template_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), self.title.clone());
        fields.insert("body".to_string(), self.body.clone());
        extend_with_scalars(&mut fields, &self.extra);
        fields
    }
}

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The kind of question, e.g. `"freeresponse"`. Selects the markup
    /// template used to render it. A kind can also come in through the
    /// question defaults at normalization time.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// The question heading.
    #[serde(default)]
    pub title: String,

    /// Explanatory text shown under the heading.
    #[serde(default)]
    pub subtitle: String,

    /// Placeholder text for the input element.
    #[serde(default)]
    pub placeholder: String,

    /// Whether the question may be skipped. A required question offers only
    /// `next`; a non-required one offers `skip` then `next`.
    #[serde(default)]
    pub required: bool,

    /// Delay in milliseconds after which the page auto-advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_timer: Option<u64>,

    /// Unknown fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// The auto-advance delay, if this question carries one.
    pub fn next_timer(&self) -> Option<Duration> {
        self.next_timer.map(Duration::from_millis)
    }

    /// The fields available for placeholder substitution on this question.
    pub fn template_fields(&self) -> BTreeMap<String, String> {
        let mut fields = BTreeMap::new();
        fields.insert("type".to_string(), self.kind.clone());
        fields.insert("title".to_string(), self.title.clone());
        fields.insert("subtitle".to_string(), self.subtitle.clone());
        fields.insert("placeholder".to_string(), self.placeholder.clone());
        extend_with_scalars(&mut fields, &self.extra);
        fields
    }
}

/// Add every scalar value from `extra` to the field map, stringified.
/// Strings go in verbatim, numbers and booleans via `Display`; null,
/// arrays and objects are not substitutable and are skipped.
fn extend_with_scalars(fields: &mut BTreeMap<String, String>, extra: &Map<String, Value>) {
    for (key, value) in extra {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        fields.entry(key.clone()).or_insert(text);
    }
}
