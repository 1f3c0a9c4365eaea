//! Wire types for the chat-completions API.

use reelcraft_core::{GenerateRequest, ResponseFormat, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormatSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResponseFormatSpec {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatMessageResponse {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}

impl<'a> ChatRequest<'a> {
    pub fn from_request(req: &'a GenerateRequest, default_model: &'a str) -> Self {
        Self {
            model: req.model().as_deref().unwrap_or(default_model),
            messages: req
                .messages()
                .iter()
                .map(|m| ChatMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            response_format: match req.response_format() {
                ResponseFormat::Json => Some(ResponseFormatSpec {
                    kind: "json_object",
                }),
                ResponseFormat::Text => None,
            },
            temperature: *req.temperature(),
            max_tokens: *req.max_tokens(),
        }
    }
}

impl ChatResponse {
    /// Content of the first choice, if any.
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}
