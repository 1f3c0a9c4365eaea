//! Trait definitions for model drivers and pipeline stages.

use async_trait::async_trait;
use reelcraft_core::{
    AnalysisResult, GenerateRequest, GenerateResponse, GenerationRequest, GenerationResult,
    PipelineOutput, Platform,
};
use reelcraft_error::ReelcraftResult;
use std::sync::Arc;

/// Core trait that every model provider implements.
#[async_trait]
pub trait ModelDriver: Send + Sync {
    /// Send one request to the provider and return what it produced.
    ///
    /// Implementations make exactly one outbound call and never retry.
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse>;

    /// Provider name (e.g., "gemini", "openai").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;

    /// Fail with a configuration error if the driver cannot make calls,
    /// typically because its API key is absent. Makes no network call.
    fn ensure_configured(&self) -> ReelcraftResult<()> {
        Ok(())
    }
}

#[async_trait]
impl<D: ModelDriver + ?Sized> ModelDriver for Arc<D> {
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn ensure_configured(&self) -> ReelcraftResult<()> {
        (**self).ensure_configured()
    }
}

/// First pipeline stage: competitor text in, structured analysis out.
#[async_trait]
pub trait AnalysisStage: Send + Sync {
    /// Analyze `raw_text` for `niche`.
    async fn analyze(&self, raw_text: &str, niche: &str) -> ReelcraftResult<AnalysisResult>;

    /// See [`ModelDriver::ensure_configured`].
    fn ensure_configured(&self) -> ReelcraftResult<()>;
}

/// Second pipeline stage: analysis in, per-platform scripts out.
#[async_trait]
pub trait GenerationStage: Send + Sync {
    /// Generate scripts for every platform from a completed analysis.
    async fn generate(
        &self,
        niche: &str,
        platforms: &[Platform],
        analysis: &AnalysisResult,
    ) -> ReelcraftResult<GenerationResult>;

    /// See [`ModelDriver::ensure_configured`].
    fn ensure_configured(&self) -> ReelcraftResult<()>;
}

/// A complete request → output pipeline, as seen by the outer surfaces.
#[async_trait]
pub trait ScriptPipeline: Send + Sync {
    /// Run one request end to end.
    async fn run(&self, request: GenerationRequest) -> ReelcraftResult<PipelineOutput>;
}
