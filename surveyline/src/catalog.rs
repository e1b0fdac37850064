//! Normalization of raw survey data into an immutable catalog.
//!
//! Raw definitions arrive as a JSON object mapping survey id to survey
//! definition. Each definition is shallow-merged over the defaults in
//! [`CatalogDefaults`], each question over the question defaults, and the
//! result is deserialized into typed [`Survey`] values. Anything malformed
//! fails here with a typed error instead of surfacing later as a broken
//! render.

use std::collections::BTreeMap;

use log::debug;
use serde_json::{Map, Value, json};
use surveyline_types::{Survey, SurveyError};

/// Built-in defaults merged underneath every survey and question.
///
/// Merge precedence, highest first: fields in the raw definition, then
/// fields here. The merge is shallow; nested objects are replaced wholesale,
/// not merged recursively.
///
/// The built-in survey defaults deliberately do not supply placeholder
/// `titlePage`/`thanksPage` objects: a survey missing either page must fail
/// normalization with `MalformedSurvey`, not limp along to render time.
#[derive(Debug, Clone)]
pub struct CatalogDefaults {
    /// JSON object merged underneath every survey definition.
    pub survey: Map<String, Value>,

    /// JSON object merged underneath every question.
    pub question: Map<String, Value>,
}

impl CatalogDefaults {
    /// Create the built-in defaults: surveys get an empty question list,
    /// questions are not required.
    pub fn new() -> Self {
        Self {
            survey: as_object(json!({ "questions": [] })),
            question: as_object(json!({ "required": false })),
        }
    }

    /// Replace the survey defaults object.
    pub fn with_survey(mut self, defaults: Value) -> Self {
        self.survey = as_object(defaults);
        self
    }

    /// Replace the question defaults object.
    pub fn with_question(mut self, defaults: Value) -> Self {
        self.question = as_object(defaults);
        self
    }
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        Self::new()
    }
}

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// An immutable, normalized set of surveys, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct SurveyCatalog {
    surveys: BTreeMap<String, Survey>,
}

impl SurveyCatalog {
    /// Normalize a raw survey data set against the given defaults.
    ///
    /// `raw` is a JSON object mapping survey id to survey definition. The
    /// input is consumed, never mutated in place; unknown fields in the
    /// definitions pass through unexamined.
    pub fn normalize(raw: Value, defaults: &CatalogDefaults) -> Result<Self, SurveyError> {
        let Value::Object(entries) = raw else {
            return Err(SurveyError::malformed(
                "<data set>",
                "survey data set must be a JSON object mapping id to definition",
            ));
        };

        let mut surveys = BTreeMap::new();

        for (id, definition) in entries {
            let survey = normalize_survey(&id, definition, defaults)?;
            surveys.insert(id, survey);
        }

        debug!("normalized catalog with {} survey(s)", surveys.len());

        Ok(Self { surveys })
    }

    /// Look up a survey by id.
    pub fn get(&self, id: &str) -> Option<&Survey> {
        self.surveys.get(id)
    }

    /// Check if the catalog contains a survey with the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.surveys.contains_key(id)
    }

    /// The ids of all surveys, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.surveys.keys().map(String::as_str)
    }

    /// The number of surveys in the catalog.
    pub fn len(&self) -> usize {
        self.surveys.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.surveys.is_empty()
    }
}

fn normalize_survey(
    id: &str,
    definition: Value,
    defaults: &CatalogDefaults,
) -> Result<Survey, SurveyError> {
    let Value::Object(provided) = definition else {
        return Err(SurveyError::malformed(id, "definition must be a JSON object"));
    };

    let mut merged = shallow_merge(&defaults.survey, provided);

    for key in ["titlePage", "thanksPage"] {
        if !merged.contains_key(key) {
            return Err(SurveyError::malformed(id, format!("missing {key}")));
        }
    }

    // Question defaults apply underneath each entry, order preserved.
    if let Some(Value::Array(questions)) = merged.get_mut("questions") {
        for question in questions.iter_mut() {
            if let Value::Object(provided) = question.take() {
                *question = Value::Object(shallow_merge(&defaults.question, provided));
            }
        }
    }

    let mut survey: Survey = serde_json::from_value(Value::Object(merged))
        .map_err(|e| SurveyError::malformed(id, e.to_string()))?;
    survey.id = id.to_string();

    Ok(survey)
}

/// Overlay `provided` on top of `defaults`, one level deep.
fn shallow_merge(defaults: &Map<String, Value>, provided: Map<String, Value>) -> Map<String, Value> {
    let mut merged = defaults.clone();
    for (key, value) in provided {
        merged.insert(key, value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(extra: Value) -> Value {
        let mut survey = as_object(json!({
            "titlePage": { "title": "Hello", "body": "Welcome" },
            "thanksPage": { "title": "Done", "body": "Thanks" }
        }));
        if let Value::Object(fields) = extra {
            survey.extend(fields);
        }
        json!({ "s1": survey })
    }

    #[test]
    fn question_defaults_are_merged() {
        let raw = minimal(json!({
            "questions": [ { "type": "freeresponse", "title": "Q1" } ]
        }));
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();

        let question = &catalog.get("s1").unwrap().questions[0];
        assert_eq!(question.title, "Q1");
        assert!(!question.required);
    }

    #[test]
    fn provided_fields_beat_defaults() {
        let defaults = CatalogDefaults::default().with_question(json!({ "required": true }));
        let raw = minimal(json!({
            "questions": [
                { "type": "freeresponse", "title": "Q1" },
                { "type": "freeresponse", "title": "Q2", "required": false }
            ]
        }));
        let catalog = SurveyCatalog::normalize(raw, &defaults).unwrap();

        let survey = catalog.get("s1").unwrap();
        assert!(survey.questions[0].required);
        assert!(!survey.questions[1].required);
    }

    #[test]
    fn question_without_type_still_normalizes() {
        let raw = minimal(json!({ "questions": [ { "title": "Q1" } ] }));
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();

        let question = &catalog.get("s1").unwrap().questions[0];
        assert_eq!(question.title, "Q1");
        assert!(!question.required);
        assert_eq!(question.kind, "");
    }

    #[test]
    fn default_question_can_supply_a_kind() {
        let defaults = CatalogDefaults::default()
            .with_question(json!({ "required": false, "type": "freeresponse" }));
        let raw = minimal(json!({ "questions": [ { "title": "Q1" } ] }));
        let catalog = SurveyCatalog::normalize(raw, &defaults).unwrap();

        assert_eq!(catalog.get("s1").unwrap().questions[0].kind, "freeresponse");
    }

    #[test]
    fn question_order_is_preserved() {
        let raw = minimal(json!({
            "questions": [
                { "type": "freeresponse", "title": "first" },
                { "type": "freeresponse", "title": "second" },
                { "type": "freeresponse", "title": "third" }
            ]
        }));
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();

        let titles: Vec<_> = catalog.get("s1").unwrap().questions.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn missing_thanks_page_is_malformed() {
        let raw = json!({
            "s1": { "titlePage": { "title": "T", "body": "B" } }
        });
        let err = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedSurvey { ref id, ref reason }
            if id == "s1" && reason.contains("thanksPage")));
    }

    #[test]
    fn missing_title_page_is_malformed() {
        let raw = json!({
            "s1": { "thanksPage": { "title": "T", "body": "B" } }
        });
        let err = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedSurvey { .. }));
    }

    #[test]
    fn survey_defaults_can_supply_pages() {
        // Opting back into lenient pages via custom defaults.
        let defaults = CatalogDefaults::default().with_survey(json!({
            "questions": [],
            "titlePage": {},
            "thanksPage": {}
        }));
        let raw = json!({ "s1": {} });
        let catalog = SurveyCatalog::normalize(raw, &defaults).unwrap();

        let survey = catalog.get("s1").unwrap();
        assert_eq!(survey.title_page.title, "");
        assert!(survey.questions.is_empty());
    }

    #[test]
    fn unknown_fields_survive_normalization() {
        let raw = minimal(json!({ "campaign": "spring-launch" }));
        let catalog = SurveyCatalog::normalize(raw, &CatalogDefaults::default()).unwrap();

        let survey = catalog.get("s1").unwrap();
        assert_eq!(survey.extra["campaign"], json!("spring-launch"));
    }

    #[test]
    fn id_is_taken_from_the_key() {
        let catalog = SurveyCatalog::normalize(minimal(json!({})), &CatalogDefaults::default()).unwrap();
        assert_eq!(catalog.get("s1").unwrap().id, "s1");
    }

    #[test]
    fn non_object_data_set_is_rejected() {
        let err = SurveyCatalog::normalize(json!([1, 2]), &CatalogDefaults::default()).unwrap_err();
        assert!(matches!(err, SurveyError::MalformedSurvey { .. }));
    }
}
