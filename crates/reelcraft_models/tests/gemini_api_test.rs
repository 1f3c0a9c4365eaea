//! Live Gemini calls. Run with `--features api` and `GEMINI_API_KEY` set.

use reelcraft_core::{GenerateRequest, Message, ResponseFormat};
use reelcraft_interface::ModelDriver;
use reelcraft_models::GeminiClient;

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_gemini_json_mode() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env();
    client.ensure_configured()?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user(
            "Return a JSON object with a single key \"ok\" set to true.",
        )])
        .response_format(ResponseFormat::Json)
        .max_tokens(64_u32)
        .build()?;

    let response = client.generate(&request).await?;
    let text = response.usable_text().expect("non-empty response");
    let value: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(value["ok"], true);
    Ok(())
}

#[tokio::test]
async fn test_gemini_without_key_reports_configuration() {
    let client = GeminiClient::new(None);
    let request = GenerateRequest::builder()
        .messages(vec![Message::user("hi")])
        .build()
        .unwrap();

    let err = client.generate(&request).await.unwrap_err();
    assert_eq!(err.class(), reelcraft_error::ErrorClass::Configuration);
}
