//! Output of the analysis stage.
//!
//! Every field defaults when the model leaves it out, so consumers never see
//! a missing field. A field of the wrong JSON type is still rejected at the
//! parse boundary.

use serde::{Deserialize, Serialize};

/// Structured breakdown of the competitor text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Short summary of the source text
    pub summary: String,
    /// Hook / body / call-to-action breakdown
    pub structure: Structure,
    /// What makes the source text attractive
    pub attraction_factors: Vec<String>,
    /// Tone of voice of the source text
    pub tone_of_voice: String,
    /// Audience insights
    pub insights: Insights,
    /// Fresh content ideas for the niche
    pub ideas: Vec<Idea>,
}

/// Rhetorical structure of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Structure {
    /// Opening hook
    pub hook: String,
    /// Main body points
    pub body_points: Vec<String>,
    /// Closing call to action
    pub closing_cta: String,
}

/// Pain / desire / false-belief breakdown of the audience.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insights {
    /// Audience pains
    pub pains: Vec<String>,
    /// Audience desires
    pub desires: Vec<String>,
    /// Beliefs the audience holds that are wrong
    pub false_beliefs: Vec<String>,
}

/// A content idea proposed by the analysis stage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Idea {
    /// Identifier referenced by generated variants (e.g. `idea_1`)
    pub id: String,
    /// Idea title
    pub title: String,
    /// One- or two-sentence description
    pub short_description: String,
    /// Video format, e.g. `review`, `story`, `tips`
    pub video_type: String,
}
