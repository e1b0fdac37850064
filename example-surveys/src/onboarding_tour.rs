//! A timed onboarding tour: every page carries a `nextTimer`, so the tour
//! plays through on its own unless the visitor clicks first. Exercises the
//! auto-advance path, including timers on the title and thanks pages.

use serde_json::{Value, json};

/// The raw data set: one survey under the id `"onboarding-tour"`.
pub fn onboarding_tour() -> Value {
    json!({
        "onboarding-tour": {
            "titlePage": {
                "title": "Welcome aboard",
                "body": "A quick look around. Sit back, or click Start to drive.",
                "nextTimer": 4000
            },
            "questions": [
                {
                    "type": "freeresponse",
                    "title": "What brought you here?",
                    "subtitle": "Optional, and it helps us tune the tour.",
                    "placeholder": "I signed up because...",
                    "id": "motivation",
                    "nextTimer": 8000
                },
                {
                    "type": "freeresponse",
                    "title": "What should we show you first?",
                    "placeholder": "Dashboards, reports, ...",
                    "id": "first-stop",
                    "nextTimer": 8000
                }
            ],
            "thanksPage": {
                "title": "That's the tour",
                "body": "You can reopen it any time from the help menu.",
                "nextTimer": 2500
            }
        }
    })
}
