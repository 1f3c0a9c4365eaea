//! Keep credentials out of error text.

/// Replace every occurrence of `secret` in `message`.
///
/// Providers sometimes echo (part of) the key back in error bodies.
pub(crate) fn redact(message: impl Into<String>, secret: Option<&str>) -> String {
    let message = message.into();
    match secret {
        Some(secret) if !secret.is_empty() => message.replace(secret, "[REDACTED]"),
        _ => message,
    }
}
