//! Test utilities for pipeline tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

use serde_json::json;

/// A well-formed analysis document as a model would return it.
#[allow(dead_code)]
pub fn analysis_json() -> String {
    json!({
        "summary": "A before/after weight loss ad built on a time-bound promise.",
        "structure": {
            "hook": "Lose 5kg in a week!",
            "body_points": ["No gym needed", "Natural ingredients"],
            "closing_cta": "Order now"
        },
        "attraction_factors": ["Speed", "Low effort"],
        "tone_of_voice": "urgent",
        "insights": {
            "pains": ["No time to exercise"],
            "desires": ["Quick visible results"],
            "false_beliefs": ["Supplements alone are enough"]
        },
        "ideas": [
            { "id": "idea_1", "title": "Myth busting", "short_description": "Debunk fast fixes", "video_type": "tips" },
            { "id": "idea_2", "title": "Day in the life", "short_description": "Realistic routine", "video_type": "story" }
        ]
    })
    .to_string()
}

/// A generation document covering the given platform identifiers.
#[allow(dead_code)]
pub fn generation_json(platforms: &[&str]) -> String {
    let contents: Vec<_> = platforms
        .iter()
        .map(|p| {
            json!({
                "platform": p,
                "items": [
                    {
                        "idea_id": "idea_1",
                        "variant_index": 1,
                        "title": "Stop believing this",
                        "script": "Hook... body... CTA [LINK_AFFILIATE]",
                        "caption": "Real talk",
                        "hashtags": ["#fitness", "#mythbusting"]
                    },
                    {
                        "idea_id": "idea_1",
                        "variant_index": 2,
                        "title": "The truth about quick fixes",
                        "script": "Hook... body... CTA [LINK_AFFILIATE]",
                        "caption": "Save this",
                        "hashtags": ["#health"]
                    }
                ]
            })
        })
        .collect();
    json!({ "platform_contents": contents }).to_string()
}
