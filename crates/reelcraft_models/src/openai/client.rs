//! OpenAI chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use reelcraft_core::{GenerateRequest, GenerateResponse};
use reelcraft_error::{ConfigError, ProviderError, ProviderErrorKind, ReelcraftResult};
use reelcraft_interface::ModelDriver;

use super::dto::{ApiErrorBody, ChatRequest, ChatResponse};
use crate::redact::redact;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Default chat-completions endpoint.
pub const OPENAI_CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const PROVIDER: &str = "openai";
const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Client for the OpenAI chat-completions API (or a compatible endpoint).
///
/// The underlying `reqwest::Client` is created once and shared by clones.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: Option<String>,
    model_name: String,
    endpoint: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("model_name", &self.model_name)
            .field("endpoint", &self.endpoint)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl OpenAIClient {
    /// Create a client with an explicit (possibly absent) API key.
    ///
    /// Blank keys are treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model_name: DEFAULT_MODEL.to_string(),
            endpoint: OPENAI_CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    /// Create a client reading the key from `OPENAI_API_KEY`.
    #[instrument(name = "openai_client_from_env")]
    pub fn from_env() -> Self {
        Self::new(std::env::var(OPENAI_API_KEY_VAR).ok())
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Point the client at a different chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn api_key(&self) -> ReelcraftResult<&String> {
        self.api_key.as_ref().ok_or_else(|| {
            ConfigError::new(format!("{} environment variable not set", OPENAI_API_KEY_VAR))
                .into()
        })
    }

    fn http_error(&self, context: &str, err: impl std::fmt::Display) -> ProviderError {
        ProviderError::new(ProviderErrorKind::Http {
            provider: PROVIDER.to_string(),
            message: redact(format!("{}: {}", context, err), self.api_key.as_deref()),
        })
    }

    /// Pull `error.message` out of an error body, falling back to the raw text.
    fn api_error_message(&self, body: &str) -> String {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        redact(message, self.api_key.as_deref())
    }
}

#[async_trait]
impl ModelDriver for OpenAIClient {
    #[instrument(
        skip(self, req),
        fields(provider = PROVIDER, model = tracing::field::Empty, prompt_len = req.prompt_len())
    )]
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        let api_key = self.api_key()?;
        let body = ChatRequest::from_request(req, &self.model_name);
        tracing::Span::current().record("model", body.model);
        debug!(endpoint = %self.endpoint, "Sending chat completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.http_error("Request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::Api {
                provider: PROVIDER.to_string(),
                status: status.as_u16(),
                message: self.api_error_message(&error_text),
            })
            .into());
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.http_error("Failed to parse response", e))?;

        match chat.into_content() {
            Some(text) => {
                debug!(response_len = text.len(), "OpenAI response received");
                Ok(GenerateResponse::text(text))
            }
            None => Ok(GenerateResponse::empty()),
        }
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn ensure_configured(&self) -> ReelcraftResult<()> {
        self.api_key().map(|_| ())
    }
}
