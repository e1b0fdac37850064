//! The smallest interesting catalog: a survey with no questions at all
//! (title page advances straight to thanks) next to a one-question poll.

use serde_json::{Value, json};

/// The raw data set: `"announcement"` (zero questions) and `"exit-poll"`
/// (one required question).
pub fn exit_poll() -> Value {
    json!({
        "announcement": {
            "titlePage": {
                "title": "Heads up",
                "body": "We are moving to the new billing page next week."
            },
            "thanksPage": {
                "title": "Noted",
                "body": "Thanks for reading."
            }
        },
        "exit-poll": {
            "titlePage": {
                "title": "Before you go",
                "body": "One question, we promise."
            },
            "questions": [
                {
                    "type": "freeresponse",
                    "title": "Why are you cancelling?",
                    "placeholder": "Be blunt",
                    "id": "reason",
                    "required": true
                }
            ],
            "thanksPage": {
                "title": "Thanks",
                "body": "Sorry to see you go."
            }
        }
    })
}
