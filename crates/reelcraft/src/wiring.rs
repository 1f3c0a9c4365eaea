//! Building the production pipeline from configuration.

use reelcraft_error::ReelcraftResult;
use reelcraft_models::{GeminiClient, OpenAIClient};
use reelcraft_pipeline::{AnalysisClient, GenerationClient, Pipeline, PromptSet};
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::{Credentials, ReelcraftConfig};

/// Gemini analysis followed by OpenAI-compatible generation.
pub type ReelcraftPipeline = Pipeline<AnalysisClient<GeminiClient>, GenerationClient<OpenAIClient>>;

/// Wire provider clients, templates and deadlines into a pipeline.
///
/// Missing credentials are logged, not rejected: each request will fail with
/// a configuration error until the keys are provided.
///
/// # Errors
///
/// Returns a configuration error if a prompt template file cannot be read.
#[instrument(skip_all, fields(analysis_model = %config.analysis.model, generation_model = %config.generation.model))]
pub fn build_pipeline(
    config: &ReelcraftConfig,
    credentials: Credentials,
) -> ReelcraftResult<ReelcraftPipeline> {
    let missing = credentials.missing();
    if !missing.is_empty() {
        warn!(?missing, "API keys not set; requests will fail until they are provided");
    }

    let prompts = PromptSet::load(
        config.prompts.analysis_template.as_deref(),
        config.prompts.generation_template.as_deref(),
    )?;

    let gemini = GeminiClient::new(credentials.gemini_api_key);
    let analysis = AnalysisClient::new(gemini)
        .with_template(prompts.analysis().clone())
        .with_model(config.analysis.model.clone())
        .with_timeout(Duration::from_secs(config.analysis.timeout_secs));

    let openai = OpenAIClient::new(credentials.openai_api_key)
        .with_endpoint(config.generation.endpoint.clone());
    let mut generation = GenerationClient::new(openai)
        .with_template(prompts.generation().clone())
        .with_model(config.generation.model.clone())
        .with_temperature(config.generation.temperature)
        .with_timeout(Duration::from_secs(config.generation.timeout_secs));
    if let Some(max_tokens) = config.generation.max_tokens {
        generation = generation.with_max_tokens(max_tokens);
    }
    if let Some(system_prompt) = &config.generation.system_prompt {
        generation = generation.with_system_prompt(system_prompt.clone());
    }

    info!("Pipeline ready");
    Ok(Pipeline::new(analysis, generation))
}
