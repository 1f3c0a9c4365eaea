//! Analysis stage: competitor text to structured insights.

use async_trait::async_trait;
use reelcraft_core::{AnalysisResult, GenerateRequest, Message, ResponseFormat};
use reelcraft_error::{BuilderError, ReelcraftResult};
use reelcraft_interface::{AnalysisStage, ModelDriver};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::call::{DEFAULT_TIMEOUT, call_for_text};
use crate::prompts::{ANALYSIS_TEMPLATE, NICHE, RAW_TEXT};
use crate::{missing_substitutions, parse_loose_as, render};

/// Runs the analysis prompt against a model driver in JSON mode.
#[derive(Debug, Clone)]
pub struct AnalysisClient<D> {
    driver: D,
    template: String,
    model: Option<String>,
    timeout: Duration,
}

impl<D: ModelDriver> AnalysisClient<D> {
    /// Client with the built-in template, the driver's default model and a 60 s deadline.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            template: ANALYSIS_TEMPLATE.to_string(),
            model: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Use a different prompt template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Request a specific model instead of the driver default.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
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

    fn build_prompt(&self, raw_text: &str, niche: &str) -> String {
        let subs = HashMap::from([(NICHE, niche), (RAW_TEXT, raw_text)]);
        let leftover = missing_substitutions(&self.template, &subs);
        if !leftover.is_empty() {
            warn!(placeholders = ?leftover, "Analysis template has unresolved placeholders");
        }
        render(&self.template, &subs)
    }

    fn build_request(&self, prompt: String) -> ReelcraftResult<GenerateRequest> {
        let mut builder = GenerateRequest::builder();
        builder
            .messages(vec![Message::user(prompt)])
            .response_format(ResponseFormat::Json);
        if let Some(model) = &self.model {
            builder.model(model.clone());
        }
        builder
            .build()
            .map_err(|e| BuilderError::new(e.to_string()).into())
    }
}

#[async_trait]
impl<D: ModelDriver> AnalysisStage for AnalysisClient<D> {
    #[instrument(
        skip(self, raw_text),
        fields(provider = self.driver.provider_name(), raw_len = raw_text.len())
    )]
    async fn analyze(&self, raw_text: &str, niche: &str) -> ReelcraftResult<AnalysisResult> {
        let prompt = self.build_prompt(raw_text, niche);
        let request = self.build_request(prompt)?;

        let text = call_for_text(&self.driver, &request, self.timeout).await?;
        let analysis: AnalysisResult = parse_loose_as(&text)?;

        info!(ideas = analysis.ideas.len(), "Analysis complete");
        Ok(analysis)
    }

    fn ensure_configured(&self) -> ReelcraftResult<()> {
        self.driver.ensure_configured()
    }
}
