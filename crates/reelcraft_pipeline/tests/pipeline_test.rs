//! End-to-end pipeline tests over mock drivers.

mod test_utils;

use reelcraft_core::{GenerationRequest, PipelineOutput};
use reelcraft_error::{ErrorClass, ProviderErrorKind, ReelcraftErrorKind};
use reelcraft_interface::ScriptPipeline;
use reelcraft_pipeline::{AnalysisClient, GenerationClient, Pipeline};
use std::sync::Arc;
use test_utils::{MockDriver, analysis_json, generation_json};

type MockPipeline = Pipeline<AnalysisClient<Arc<MockDriver>>, GenerationClient<Arc<MockDriver>>>;

fn pipeline(analysis: &Arc<MockDriver>, generation: &Arc<MockDriver>) -> MockPipeline {
    Pipeline::new(
        AnalysisClient::new(analysis.clone()),
        GenerationClient::new(generation.clone()),
    )
}

fn weight_loss_request(platforms: &[&str]) -> GenerationRequest {
    GenerationRequest::new(
        "Lose 5kg in a week with our miracle tea! No gym, no diet.",
        "Weight Loss",
        platforms.iter().copied(),
    )
}

#[tokio::test]
async fn test_single_platform_round_trip() -> anyhow::Result<()> {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let output: PipelineOutput = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await?;

    assert_eq!(output.generated.platform_contents.len(), 1);
    assert_eq!(output.generated.platform_contents[0].platform, "tiktok");
    assert_eq!(output.generated.platform_contents[0].items.len(), 2);
    assert_eq!(output.analysis.ideas.len(), 2);
    assert_eq!(analysis.call_count(), 1);
    assert_eq!(generation.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_generation_prompt_carries_analysis_and_platforms() -> anyhow::Result<()> {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_success(generation_json(&[
        "tiktok",
        "youtube_shorts",
    ])));

    pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok", "youtube_shorts"]))
        .await?;

    let analysis_prompt = analysis.last_prompt().expect("analysis prompt");
    assert!(analysis_prompt.contains("Niche: Weight Loss"));
    assert!(analysis_prompt.contains("miracle tea"));
    assert!(!analysis_prompt.contains("{{"));

    let generation_prompt = generation.last_prompt().expect("generation prompt");
    assert!(generation_prompt.contains(r#"Platforms: ["tiktok","youtube_shorts"]"#));
    assert!(generation_prompt.contains("Myth busting"));
    assert!(!generation_prompt.contains("{{ANALYSIS_JSON}}"));
    Ok(())
}

#[tokio::test]
async fn test_empty_analysis_never_reaches_generation() {
    let analysis = Arc::new(MockDriver::new_empty().named("gemini"));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await
        .unwrap_err();

    match err.kind() {
        ReelcraftErrorKind::EmptyResponse(e) => assert_eq!(e.provider, "gemini"),
        other => panic!("expected empty response, got {other:?}"),
    }
    assert_eq!(analysis.call_count(), 1);
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_whitespace_analysis_is_empty() {
    let analysis = Arc::new(MockDriver::new_success("  \n "));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), ReelcraftErrorKind::EmptyResponse(_)));
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_empty_platforms_fail_before_any_call() {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_success(generation_json(&[])));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&[]))
        .await
        .unwrap_err();

    match err.kind() {
        ReelcraftErrorKind::Validation(e) => assert_eq!(e.field, "platforms"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(analysis.call_count(), 0);
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_input_fails_before_any_call() {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));
    let pipeline = pipeline(&analysis, &generation);

    let cases = [
        GenerationRequest::new("   ", "Weight Loss", ["tiktok"]),
        GenerationRequest::new("text", "\t", ["tiktok"]),
        GenerationRequest::new("text", "Weight Loss", ["myspace"]),
        GenerationRequest::new("text", "Weight Loss", ["tiktok", "tiktok"]),
    ];

    for request in cases {
        let err = pipeline.run(request).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::InvalidInput, "{err}");
    }
    assert_eq!(analysis.call_count(), 0);
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_missing_credentials_fail_before_any_call() {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(
        MockDriver::new_success(generation_json(&["tiktok"]))
            .named("openai")
            .unconfigured(),
    );

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Configuration);
    assert_eq!(analysis.call_count(), 0);
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_validation_runs_before_credential_check() {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()).unconfigured());
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&[]))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::InvalidInput);
}

#[tokio::test]
async fn test_malformed_analysis_short_circuits() {
    let analysis = Arc::new(MockDriver::new_success("not json at all"));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await
        .unwrap_err();

    match err.kind() {
        ReelcraftErrorKind::MalformedOutput(e) => assert_eq!(e.raw, "not json at all"),
        other => panic!("expected malformed output, got {other:?}"),
    }
    assert_eq!(generation.call_count(), 0);
}

#[tokio::test]
async fn test_fenced_output_is_accepted_by_both_stages() -> anyhow::Result<()> {
    let analysis = Arc::new(MockDriver::new_success(format!(
        "```json\n{}\n```",
        analysis_json()
    )));
    let generation = Arc::new(MockDriver::new_success(format!(
        "Here are your scripts:\n```\n{}\n```",
        generation_json(&["facebook_reels"])
    )));

    let output = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["facebook_reels"]))
        .await?;

    assert!(output.generated.for_platform("facebook_reels").is_some());
    Ok(())
}

#[tokio::test]
async fn test_provider_error_from_generation_propagates() {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_error(ProviderErrorKind::Api {
        provider: "openai".to_string(),
        status: 429,
        message: "Rate limit reached".to_string(),
    }));

    let err = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Dependency);
    assert!(err.message().contains("429"));
    assert_eq!(analysis.call_count(), 1);
    assert_eq!(generation.call_count(), 1);
}

#[tokio::test]
async fn test_sparse_analysis_is_tolerated() -> anyhow::Result<()> {
    let analysis = Arc::new(MockDriver::new_success(r#"{"summary": "short"}"#));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let output = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await?;

    assert_eq!(output.analysis.summary, "short");
    assert!(output.analysis.ideas.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_output_serializes_to_wire_shape() -> anyhow::Result<()> {
    let analysis = Arc::new(MockDriver::new_success(analysis_json()));
    let generation = Arc::new(MockDriver::new_success(generation_json(&["tiktok"])));

    let output = pipeline(&analysis, &generation)
        .run(weight_loss_request(&["tiktok"]))
        .await?;
    let value = serde_json::to_value(&output)?;

    assert_eq!(value["analysis"]["structure"]["hook"], "Lose 5kg in a week!");
    assert_eq!(value["generated"]["platform_contents"][0]["items"][1]["variant_index"], 2);
    Ok(())
}
