//! OpenAI driver tests against a local mock endpoint.

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::HeaderMap, http::StatusCode, routing::post};
use reelcraft_core::{GenerateRequest, Message, ResponseFormat};
use reelcraft_error::{ProviderErrorKind, ReelcraftErrorKind};
use reelcraft_interface::ModelDriver;
use reelcraft_models::OpenAIClient;
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    auth: Arc<Mutex<Option<String>>>,
}

/// Spawn a mock chat-completions endpoint answering with `status` and `reply`.
async fn spawn_mock(status: StatusCode, reply: Value) -> anyhow::Result<(String, Captured)> {
    let captured = Captured::default();

    let app = Router::new()
        .route(
            "/v1/chat/completions",
            post(
                move |State(captured): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| {
                    let reply = reply.clone();
                    async move {
                        *captured.body.lock().unwrap() = Some(body);
                        *captured.auth.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        (status, Json(reply))
                    }
                },
            ),
        )
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok((format!("http://{}/v1/chat/completions", addr), captured))
}

fn json_request() -> anyhow::Result<GenerateRequest> {
    Ok(GenerateRequest::builder()
        .messages(vec![
            Message::system("You are a short-form video scriptwriter."),
            Message::user("Write scripts."),
        ])
        .temperature(0.7_f32)
        .response_format(ResponseFormat::Json)
        .build()?)
}

#[tokio::test]
async fn test_sends_chat_completion_and_returns_content() -> anyhow::Result<()> {
    let (endpoint, captured) = spawn_mock(
        StatusCode::OK,
        json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"platformContents\":[]}" } }]
        }),
    )
    .await?;

    let client = OpenAIClient::new(Some("sk-test".to_string())).with_endpoint(endpoint);
    let response = client.generate(&json_request()?).await?;

    assert_eq!(response.usable_text(), Some("{\"platformContents\":[]}"));

    let body = captured.body.lock().unwrap().clone().expect("request body captured");
    assert_eq!(body["model"], "gpt-4-turbo");
    assert_eq!(body["response_format"]["type"], "json_object");
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "Write scripts.");

    let auth = captured.auth.lock().unwrap().clone();
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    Ok(())
}

#[tokio::test]
async fn test_missing_content_is_an_empty_response() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_mock(StatusCode::OK, json!({ "choices": [] })).await?;

    let client = OpenAIClient::new(Some("sk-test".to_string())).with_endpoint(endpoint);
    let response = client.generate(&json_request()?).await?;

    assert_eq!(response.usable_text(), None);
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported_without_the_key() -> anyhow::Result<()> {
    let (endpoint, _) = spawn_mock(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided: sk-leaky" } }),
    )
    .await?;

    let client = OpenAIClient::new(Some("sk-leaky".to_string())).with_endpoint(endpoint);
    let err = client.generate(&json_request()?).await.unwrap_err();

    match err.kind() {
        ReelcraftErrorKind::Provider(provider) => match &provider.kind {
            ProviderErrorKind::Api {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, "openai");
                assert_eq!(*status, 401);
                assert!(message.contains("[REDACTED]"));
            }
            other => panic!("expected API error, got {other}"),
        },
        other => panic!("expected provider error, got {other:?}"),
    }
    assert!(!err.to_string().contains("sk-leaky"));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_transport_error() -> anyhow::Result<()> {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = OpenAIClient::new(Some("sk-test".to_string()))
        .with_endpoint(format!("http://{}/v1/chat/completions", addr));
    let err = client.generate(&json_request()?).await.unwrap_err();

    assert!(matches!(
        err.kind(),
        ReelcraftErrorKind::Provider(p) if matches!(p.kind, ProviderErrorKind::Http { .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_missing_key_fails_before_any_request() -> anyhow::Result<()> {
    let (endpoint, captured) = spawn_mock(StatusCode::OK, json!({ "choices": [] })).await?;

    let client = OpenAIClient::new(None).with_endpoint(endpoint);
    let err = client.generate(&json_request()?).await.unwrap_err();

    assert!(matches!(err.kind(), ReelcraftErrorKind::Config(_)));
    assert!(err.message().contains("OPENAI_API_KEY"));
    assert!(captured.body.lock().unwrap().is_none());
    Ok(())
}
