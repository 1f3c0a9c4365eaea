//! Request and response types exchanged with model drivers.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Output format requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Provider-neutral generation request.
///
/// # Examples
///
/// ```
/// use reelcraft_core::{GenerateRequest, Message, ResponseFormat};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .temperature(0.7_f32)
///     .response_format(ResponseFormat::Json)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert_eq!(*request.temperature(), Some(0.7_f32));
/// assert_eq!(*request.model(), None);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(setter(into, strip_option))]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(setter(into, strip_option))]
    temperature: Option<f32>,
    /// Model identifier; drivers fall back to their default when unset
    #[builder(setter(into, strip_option))]
    model: Option<String>,
    /// Requested output format
    response_format: ResponseFormat,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Total characters across all message contents.
    pub fn prompt_len(&self) -> usize {
        self.messages.iter().map(|m| m.content.len()).sum()
    }
}

/// What a driver got back from its provider.
///
/// # Examples
///
/// ```
/// use reelcraft_core::GenerateResponse;
///
/// assert_eq!(GenerateResponse::text("{}").usable_text(), Some("{}"));
/// assert_eq!(GenerateResponse::text("   ").usable_text(), None);
/// assert_eq!(GenerateResponse::empty().usable_text(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Text content returned by the model, if any
    pub text: Option<String>,
}

impl GenerateResponse {
    /// Response carrying text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Response without content.
    pub fn empty() -> Self {
        Self { text: None }
    }

    /// The text, unless it is missing or blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}
