//! Google Gemini API implementation.
//!
//! The analysis stage talks to Gemini in JSON mode: the request asks for
//! `application/json` output and the driver hands back whatever text the model
//! produced. Parsing that text is the caller's business.
//!
//! A `gemini_rust::Gemini` client is built per call from the stored key, so
//! a driver with no key can still be constructed; it reports the missing key
//! through [`ModelDriver::ensure_configured`] before any network traffic.

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};

use reelcraft_core::{GenerateRequest, GenerateResponse, ResponseFormat, Role};
use reelcraft_error::{ConfigError, ProviderError, ProviderErrorKind, ReelcraftResult};
use reelcraft_interface::ModelDriver;

use crate::redact::redact;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

const PROVIDER: &str = "gemini";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Google Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    /// API key; `None` when the environment did not provide one
    api_key: Option<String>,
    /// Model used when `GenerateRequest.model` is None
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with an explicit (possibly absent) API key.
    ///
    /// Blank keys are treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model_name: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a client reading the key from `GEMINI_API_KEY`.
    #[instrument(name = "gemini_client_from_env")]
    pub fn from_env() -> Self {
        Self::new(std::env::var(GEMINI_API_KEY_VAR).ok())
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use `Model::Custom` with the "models/" prefix the API
    /// requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    fn api_key(&self) -> ReelcraftResult<&String> {
        self.api_key.as_ref().ok_or_else(|| {
            ConfigError::new(format!("{} environment variable not set", GEMINI_API_KEY_VAR))
                .into()
        })
    }

    /// Convert gemini-rust errors, extracting the HTTP status when present.
    ///
    /// gemini-rust reports statuses inside the message, e.g.
    /// "bad response from server; code 503; description: ...".
    fn parse_gemini_error(&self, err: impl std::fmt::Display) -> ProviderError {
        let message = redact(err.to_string(), self.api_key.as_deref());

        match Self::extract_status_code(&message) {
            Some(status) => ProviderError::new(ProviderErrorKind::Api {
                provider: PROVIDER.to_string(),
                status,
                message,
            }),
            None => ProviderError::new(ProviderErrorKind::Http {
                provider: PROVIDER.to_string(),
                message,
            }),
        }
    }

    fn output_token_limit(max_tokens: u32) -> ReelcraftResult<i32> {
        i32::try_from(max_tokens).map_err(|_| {
            ConfigError::new(format!(
                "max_tokens {} exceeds the Gemini limit of {}",
                max_tokens,
                i32::MAX
            ))
            .into()
        })
    }

    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl ModelDriver for GeminiClient {
    #[instrument(
        skip(self, req),
        fields(provider = PROVIDER, model = tracing::field::Empty, prompt_len = req.prompt_len())
    )]
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        let api_key = self.api_key()?;
        let model_name = req.model().as_deref().unwrap_or(&self.model_name);
        tracing::Span::current().record("model", model_name);

        let client = Gemini::with_model(api_key, Self::model_name_to_enum(model_name)).map_err(
            |e| {
                ProviderError::new(ProviderErrorKind::ClientCreation {
                    provider: PROVIDER.to_string(),
                    message: redact(e.to_string(), Some(api_key)),
                })
            },
        )?;

        let mut builder = client.generate_content();
        let mut system_prompt = None;

        for msg in req.messages() {
            match msg.role {
                // Gemini takes the system prompt separately
                Role::System => system_prompt = Some(msg.content.as_str()),
                Role::User => builder = builder.with_user_message(&msg.content),
                Role::Assistant => builder = builder.with_model_message(&msg.content),
            }
        }

        if let Some(prompt) = system_prompt {
            builder = builder.with_system_prompt(prompt);
        }

        if let Some(temp) = req.temperature() {
            builder = builder.with_temperature(*temp);
        }

        if let Some(max_tokens) = req.max_tokens() {
            builder = builder.with_max_output_tokens(Self::output_token_limit(*max_tokens)?);
        }

        if *req.response_format() == ResponseFormat::Json {
            builder = builder.with_response_mime_type("application/json");
        }

        let response = builder
            .execute()
            .await
            .map_err(|e| self.parse_gemini_error(e))?;

        let text = response.text();
        debug!(response_len = text.len(), "Gemini response received");

        if text.is_empty() {
            Ok(GenerateResponse::empty())
        } else {
            Ok(GenerateResponse::text(text))
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

#[cfg(test)]
mod tests {
    use super::*;
    use reelcraft_error::ReelcraftErrorKind;

    #[test]
    fn test_missing_key_is_a_configuration_error() {
        let client = GeminiClient::new(None);
        let err = client.ensure_configured().unwrap_err();
        assert!(matches!(err.kind(), ReelcraftErrorKind::Config(_)));
        assert!(err.message().contains(GEMINI_API_KEY_VAR));

        assert!(GeminiClient::new(Some("   ".to_string())).ensure_configured().is_err());
        assert!(GeminiClient::new(Some("key".to_string())).ensure_configured().is_ok());
    }

    #[test]
    fn test_debug_hides_key() {
        let client = GeminiClient::new(Some("AIza-secret".to_string()));
        assert!(!format!("{:?}", client).contains("AIza-secret"));
    }

    #[test]
    fn test_output_token_limit_rejects_overflow() {
        assert_eq!(GeminiClient::output_token_limit(1024).unwrap(), 1024);
        let err = GeminiClient::output_token_limit(u32::MAX).unwrap_err();
        assert!(matches!(err.kind(), ReelcraftErrorKind::Config(_)));
        assert!(err.message().contains("max_tokens"));
    }

    #[test]
    fn test_model_name_mapping() {
        assert!(matches!(
            GeminiClient::model_name_to_enum("gemini-2.5-flash"),
            Model::Gemini25Flash
        ));
        match GeminiClient::model_name_to_enum("gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
        match GeminiClient::model_name_to_enum("models/gemini-2.0-flash") {
            Model::Custom(name) => assert_eq!(name, "models/gemini-2.0-flash"),
            _ => panic!("expected custom model"),
        }
    }

    #[test]
    fn test_status_code_extraction() {
        assert_eq!(
            GeminiClient::extract_status_code("bad response from server; code 503; description: overloaded"),
            Some(503)
        );
        assert_eq!(GeminiClient::extract_status_code("code 429"), Some(429));
        assert_eq!(GeminiClient::extract_status_code("connection reset"), None);
    }

    #[test]
    fn test_gemini_errors_are_redacted() {
        let client = GeminiClient::new(Some("AIza-secret".to_string()));
        let err = client.parse_gemini_error("code 400; API key AIza-secret not valid");
        match err.kind {
            ProviderErrorKind::Api {
                status, message, ..
            } => {
                assert_eq!(status, 400);
                assert!(!message.contains("AIza-secret"));
            }
            other => panic!("expected API error, got {other}"),
        }
    }
}
