//! Pipeline results and the uniform failure shape.

use crate::{AnalysisResult, GenerationResult};
use reelcraft_error::{ProviderErrorKind, ReelcraftError, ReelcraftErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Everything one pipeline run produced. Owned by the caller; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    /// Analysis stage output
    pub analysis: AnalysisResult,
    /// Generation stage output
    pub generated: GenerationResult,
}

/// Caller-facing failure body: `{ message, detail? }`.
///
/// # Examples
///
/// ```
/// use reelcraft_core::FailureBody;
/// use reelcraft_error::{MalformedOutputError, ReelcraftError};
///
/// let err: ReelcraftError = MalformedOutputError::new("expected value", "not json at all").into();
/// let body = FailureBody::from(&err);
///
/// assert_eq!(body.message, "expected value");
/// assert_eq!(body.detail.unwrap()["raw"], "not json at all");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureBody {
    /// Human-readable description
    pub message: String,
    /// Diagnostic payload, when the error carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl FailureBody {
    /// Failure body with a message only.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }
}

impl From<&ReelcraftError> for FailureBody {
    fn from(err: &ReelcraftError) -> Self {
        let detail = match err.kind() {
            ReelcraftErrorKind::Validation(e) => Some(json!({ "field": e.field })),
            ReelcraftErrorKind::EmptyResponse(e) => Some(json!({ "provider": e.provider })),
            ReelcraftErrorKind::MalformedOutput(e) => Some(json!({
                "raw": e.raw,
                "parse_error": e.message,
            })),
            ReelcraftErrorKind::Provider(e) => match &e.kind {
                ProviderErrorKind::Api {
                    provider, status, ..
                } => Some(json!({ "provider": provider, "status": status })),
                ProviderErrorKind::Timeout {
                    provider,
                    timeout_secs,
                } => Some(json!({ "provider": provider, "timeout_secs": timeout_secs })),
                other => Some(json!({ "provider": other.provider() })),
            },
            ReelcraftErrorKind::Config(_)
            | ReelcraftErrorKind::Json(_)
            | ReelcraftErrorKind::Builder(_) => None,
        };

        Self {
            message: err.message(),
            detail,
        }
    }
}
