//! Tolerant JSON extraction from model responses.
//!
//! Models asked for JSON mostly return bare JSON, but now and then wrap it in
//! a markdown fence (optionally tagged `json`). Parsing tries the text as-is
//! first, then the fenced content, and otherwise reports malformed output with
//! the raw text attached.

use reelcraft_error::{MalformedOutputError, ReelcraftResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse `text` as JSON, stripping a markdown fence if the plain parse fails.
///
/// # Errors
///
/// Returns a malformed-output error carrying `text` when neither the raw
/// text nor the fenced content is valid JSON.
///
/// # Examples
///
/// ```
/// use reelcraft_pipeline::parse_loose;
///
/// let value = parse_loose("```json\n{\"a\":1}\n```").unwrap();
/// assert_eq!(value["a"], 1);
///
/// assert!(parse_loose("not json at all").is_err());
/// ```
pub fn parse_loose(text: &str) -> ReelcraftResult<Value> {
    let first_err = match serde_json::from_str(text) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    let Some(fenced) = strip_code_fence(text) else {
        return Err(malformed(text, &first_err));
    };

    serde_json::from_str(fenced).map_err(|e| {
        tracing::debug!(raw_len = text.len(), "Fenced content is not valid JSON");
        malformed(text, &e)
    })
}

/// [`parse_loose`] followed by typed deserialization.
///
/// # Errors
///
/// Returns a malformed-output error when the text is not JSON or does not
/// have the shape of `T`.
pub fn parse_loose_as<T: DeserializeOwned>(text: &str) -> ReelcraftResult<T> {
    let value = parse_loose(text)?;
    serde_json::from_value(value).map_err(|e| {
        MalformedOutputError::new(format!("Model output has an unexpected shape: {}", e), text)
            .into()
    })
}

fn malformed(raw: &str, err: &serde_json::Error) -> reelcraft_error::ReelcraftError {
    MalformedOutputError::new(format!("Model output is not valid JSON: {}", err), raw).into()
}

/// Content between the first and last triple-backtick markers, trimmed.
///
/// A language tag on the opening fence line is skipped. Backticks inside the
/// fenced content are kept. A missing closing fence (truncated response)
/// yields everything after the opening line.
fn strip_code_fence(text: &str) -> Option<&str> {
    let start = text.find("```")? + 3;
    let rest = &text[start..];

    // Skip the language tag, if any
    let body_start = match rest.find('\n') {
        Some(n) if rest[..n].trim().chars().all(|c| c.is_ascii_alphanumeric()) => n + 1,
        _ => 0,
    };
    let body = &rest[body_start..];

    let content = match body.rfind("```") {
        Some(end) => &body[..end],
        None => body,
    };
    Some(content.trim())
}
