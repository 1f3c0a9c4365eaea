//! Request orchestration: validate, analyze, then generate.

use async_trait::async_trait;
use reelcraft_core::{GenerationRequest, PipelineOutput};
use reelcraft_error::ReelcraftResult;
use reelcraft_interface::{AnalysisStage, GenerationStage, ScriptPipeline};
use tracing::{info, instrument};

/// The two-stage script pipeline.
///
/// Holds no per-request state; one instance serves every request.
///
/// # Examples
///
/// ```no_run
/// use reelcraft_core::GenerationRequest;
/// use reelcraft_interface::ScriptPipeline;
/// use reelcraft_models::{GeminiClient, OpenAIClient};
/// use reelcraft_pipeline::{AnalysisClient, GenerationClient, Pipeline};
///
/// # async fn run() -> reelcraft_error::ReelcraftResult<()> {
/// let pipeline = Pipeline::new(
///     AnalysisClient::new(GeminiClient::from_env()),
///     GenerationClient::new(OpenAIClient::from_env()),
/// );
///
/// let output = pipeline
///     .run(GenerationRequest::new("Lose 5kg in a week!", "Weight Loss", ["tiktok"]))
///     .await?;
/// println!("{} ideas", output.analysis.ideas.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<A, G> {
    analysis: A,
    generation: G,
}

impl<A: AnalysisStage, G: GenerationStage> Pipeline<A, G> {
    /// Pipeline over the given stages.
    pub fn new(analysis: A, generation: G) -> Self {
        Self {
            analysis,
            generation,
        }
    }

    /// The analysis stage.
    pub fn analysis(&self) -> &A {
        &self.analysis
    }

    /// The generation stage.
    pub fn generation(&self) -> &G {
        &self.generation
    }
}

#[async_trait]
impl<A: AnalysisStage, G: GenerationStage> ScriptPipeline for Pipeline<A, G> {
    #[instrument(skip_all, fields(niche = %request.niche, platforms = request.platforms.len()))]
    async fn run(&self, request: GenerationRequest) -> ReelcraftResult<PipelineOutput> {
        let request = request.validate()?;

        self.analysis.ensure_configured()?;
        self.generation.ensure_configured()?;

        let analysis = self
            .analysis
            .analyze(request.raw_text(), request.niche())
            .await?;

        let generated = self
            .generation
            .generate(request.niche(), request.platforms(), &analysis)
            .await?;

        info!(
            ideas = analysis.ideas.len(),
            platform_contents = generated.platform_contents.len(),
            "Pipeline complete"
        );
        Ok(PipelineOutput {
            analysis,
            generated,
        })
    }
}
