//! A three-question product feedback survey with a mix of required and
//! skippable questions.

use serde_json::{Value, json};

/// The raw data set: one survey under the id `"product-feedback"`.
pub fn product_feedback() -> Value {
    json!({
        "product-feedback": {
            "titlePage": {
                "title": "Got two minutes?",
                "body": "Tell us how the new editor is working out for you."
            },
            "questions": [
                {
                    "type": "freeresponse",
                    "title": "What do you use the editor for?",
                    "subtitle": "A sentence or two is plenty.",
                    "placeholder": "I mostly use it to...",
                    "id": "usage",
                    "required": true
                },
                {
                    "type": "freeresponse",
                    "title": "What is missing?",
                    "subtitle": "Anything you reached for that wasn't there.",
                    "placeholder": "I wish it could...",
                    "id": "missing"
                },
                {
                    "type": "freeresponse",
                    "title": "Anything else?",
                    "placeholder": "Whatever is on your mind",
                    "id": "freeform"
                }
            ],
            "thanksPage": {
                "title": "Thank you!",
                "body": "Your feedback goes straight to the team."
            }
        }
    })
}
