//! Generation stage: analysis to per-platform video scripts.

use async_trait::async_trait;
use reelcraft_core::{
    AnalysisResult, GenerateRequest, GenerationResult, Message, Platform, ResponseFormat,
};
use reelcraft_error::{BuilderError, JsonError, ReelcraftResult};
use reelcraft_interface::{GenerationStage, ModelDriver};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::call::{DEFAULT_TIMEOUT, call_for_text};
use crate::prompts::{ANALYSIS_JSON, GENERATION_SYSTEM_PROMPT, GENERATION_TEMPLATE, NICHE, PLATFORMS};
use crate::{missing_substitutions, parse_loose_as, render};

/// Default sampling temperature for script generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Runs the generation prompt against a chat model in JSON-object mode.
#[derive(Debug, Clone)]
pub struct GenerationClient<D> {
    driver: D,
    template: String,
    system_prompt: String,
    model: Option<String>,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout: Duration,
}

impl<D: ModelDriver> GenerationClient<D> {
    /// Client with the built-in template and persona, temperature 0.7 and a 60 s deadline.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            template: GENERATION_TEMPLATE.to_string(),
            system_prompt: GENERATION_SYSTEM_PROMPT.to_string(),
            model: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different prompt template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Use a different system persona.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Request a specific model instead of the driver default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap on generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Deadline for the model call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    fn build_prompt(
        &self,
        niche: &str,
        platforms: &[Platform],
        analysis: &AnalysisResult,
    ) -> ReelcraftResult<String> {
        let platform_ids: Vec<&str> = platforms.iter().map(Platform::id).collect();
        let platforms_json = serde_json::to_string(&platform_ids)
            .map_err(|e| JsonError::new(format!("Failed to serialize platforms: {}", e)))?;
        let analysis_json = serde_json::to_string(analysis)
            .map_err(|e| JsonError::new(format!("Failed to serialize analysis: {}", e)))?;

        let subs = HashMap::from([
            (NICHE, niche),
            (PLATFORMS, platforms_json.as_str()),
            (ANALYSIS_JSON, analysis_json.as_str()),
        ]);
        let leftover = missing_substitutions(&self.template, &subs);
        if !leftover.is_empty() {
            warn!(placeholders = ?leftover, "Generation template has unresolved placeholders");
        }
        Ok(render(&self.template, &subs))
    }

    fn build_request(&self, prompt: String) -> ReelcraftResult<GenerateRequest> {
        let mut builder = GenerateRequest::builder();
        builder
            .messages(vec![
                Message::system(self.system_prompt.clone()),
                Message::user(prompt),
            ])
            .temperature(self.temperature)
            .response_format(ResponseFormat::Json);
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        if let Some(max_tokens) = self.max_tokens {
            builder.max_tokens(max_tokens);
        }
        builder
            .build()
            .map_err(|e| BuilderError::new(e.to_string()).into())
    }
}

/// Log content that does not line up with what was requested.
///
/// None of these fail the request.
fn check_coverage(platforms: &[Platform], result: &GenerationResult) {
    for platform in platforms {
        if result.for_platform(platform.id()).is_none() {
            warn!(platform = platform.id(), "No content generated for requested platform");
        }
    }

    for content in &result.platform_contents {
        if !platforms.iter().any(|p| p.id() == content.platform) {
            warn!(platform = %content.platform, "Content generated for unrequested platform");
        }
        for item in content.items.iter().filter(|i| i.variant_index < 1) {
            warn!(
                platform = %content.platform,
                idea_id = %item.idea_id,
                variant_index = item.variant_index,
                "Variant index below 1"
            );
        }
    }
}

#[async_trait]
impl<D: ModelDriver> GenerationStage for GenerationClient<D> {
    #[instrument(
        skip(self, platforms, analysis),
        fields(provider = self.driver.provider_name(), platforms = platforms.len())
    )]
    async fn generate(
        &self,
        niche: &str,
        platforms: &[Platform],
        analysis: &AnalysisResult,
    ) -> ReelcraftResult<GenerationResult> {
        let prompt = self.build_prompt(niche, platforms, analysis)?;
        let request = self.build_request(prompt)?;

        let text = call_for_text(&self.driver, &request, self.timeout).await?;
        let result: GenerationResult = parse_loose_as(&text)?;

        check_coverage(platforms, &result);
        info!(
            platform_contents = result.platform_contents.len(),
            "Generation complete"
        );
        Ok(result)
    }

    fn ensure_configured(&self) -> ReelcraftResult<()> {
        self.driver.ensure_configured()
    }
}
