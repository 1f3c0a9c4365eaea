//! Built-in prompt templates and optional file overrides.

use reelcraft_error::{ConfigError, ReelcraftResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Placeholder for the target niche.
pub const NICHE: &str = "NICHE";
/// Placeholder for the competitor text.
pub const RAW_TEXT: &str = "RAW_TEXT";
/// Placeholder for the JSON array of platform identifiers.
pub const PLATFORMS: &str = "PLATFORMS";
/// Placeholder for the serialized analysis.
pub const ANALYSIS_JSON: &str = "ANALYSIS_JSON";

/// Analysis stage prompt.
pub const ANALYSIS_TEMPLATE: &str = r#"
Role: You are an expert in analyzing marketing content.

Niche: {{NICHE}}

Competitor content:
"""
{{RAW_TEXT}}
"""

Tasks:
1. Summarize the content in 5-10 sentences.
2. Break down its structure (hook, body, CTA).
3. List what makes it attractive.
4. Identify pains, desires and false beliefs of the audience.
5. Propose 10 new content ideas that fit the {{NICHE}} niche.

Return JSON:
{
 "summary": "...",
 "structure": {
   "hook": "...",
   "body_points": ["...", "..."],
   "closing_cta": "..."
 },
 "attraction_factors": ["...", "..."],
 "tone_of_voice": "...",
 "insights": {
   "pains": ["..."],
   "desires": ["..."],
   "false_beliefs": ["..."]
 },
 "ideas": [
   {
     "id": "idea_1",
     "title": "...",
     "short_description": "...",
     "video_type": "review|story|tips|..."
   }
 ]
}
"#;

/// Generation stage prompt.
pub const GENERATION_TEMPLATE: &str = r#"
Role: You are an expert short-form video content creator.

Niche: {{NICHE}}
Platforms: {{PLATFORMS}}

Here is the analysis of the competitor content:
{{ANALYSIS_JSON}}

Tasks:
1. Pick the 3 best ideas.
2. For EACH platform, write 2 different content variants.

Each variant is a JSON object:
{
 "idea_id": "...",
 "variant_index": 1,
 "title": "...",
 "script": "...",
 "caption": "...",
 "hashtags": ["...", "..."]
}

Open with a strong hook in the first 3 seconds.
Do not copy the original content.
Use the placeholder [LINK_AFFILIATE] in every CTA.
Return JSON:
{
 "platform_contents": [
   {
     "platform": "tiktok",
     "items": [ ... ]
   }
 ]
}
"#;

/// System persona for the generation stage.
pub const GENERATION_SYSTEM_PROMPT: &str = "You are an expert short-form video content creator.";

/// The pair of templates used by a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptSet {
    analysis: String,
    generation: String,
}

impl Default for PromptSet {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
            generation: GENERATION_TEMPLATE.to_string(),
        }
    }
}

impl PromptSet {
    /// Built-in templates, with either one replaced by a file when a path is given.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an override file cannot be read.
    #[instrument]
    pub fn load(
        analysis_path: Option<&Path>,
        generation_path: Option<&Path>,
    ) -> ReelcraftResult<Self> {
        let mut prompts = Self::default();
        if let Some(path) = analysis_path {
            prompts.analysis = read_template(path)?;
        }
        if let Some(path) = generation_path {
            prompts.generation = read_template(path)?;
        }
        Ok(prompts)
    }
}

fn read_template(path: &Path) -> ReelcraftResult<String> {
    let template = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::new(format!(
            "Failed to read prompt template {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!(path = %path.display(), len = template.len(), "Loaded prompt template");
    Ok(template)
}
