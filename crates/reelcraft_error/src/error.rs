//! Top-level error wrapper types.

use crate::{
    BuilderError, ConfigError, EmptyResponseError, JsonError, MalformedOutputError, ProviderError,
    ValidationError,
};

/// Every error a Reelcraft operation can produce.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ConfigError, ReelcraftError};
///
/// let err: ReelcraftError = ConfigError::new("OPENAI_API_KEY environment variable not set").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ReelcraftErrorKind {
    /// Request validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Provider returned no usable content
    #[from(EmptyResponseError)]
    EmptyResponse(EmptyResponseError),
    /// Provider content was not valid JSON of the expected shape
    #[from(MalformedOutputError)]
    MalformedOutput(MalformedOutputError),
    /// Provider transport/API failure or deadline expiry
    #[from(ProviderError)]
    Provider(ProviderError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Caller-visible classification of a failure.
///
/// The HTTP layer maps these to status codes and the CLI maps them to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorClass {
    /// The caller sent a bad request
    #[display("invalid input")]
    InvalidInput,
    /// The service is misconfigured (operator intervention required)
    #[display("configuration")]
    Configuration,
    /// A model provider failed or returned unusable content
    #[display("dependency")]
    Dependency,
    /// A model provider did not answer in time
    #[display("timeout")]
    Timeout,
    /// Anything else
    #[display("internal")]
    Internal,
}

/// Reelcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ErrorClass, MalformedOutputError, ReelcraftResult};
///
/// fn parse() -> ReelcraftResult<()> {
///     Err(MalformedOutputError::new("expected value", "garbage"))?
/// }
///
/// let err = parse().unwrap_err();
/// assert_eq!(err.class(), ErrorClass::Dependency);
/// assert_eq!(err.message(), "expected value");
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Reelcraft Error: {}", _0)]
pub struct ReelcraftError(Box<ReelcraftErrorKind>);

impl ReelcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: ReelcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ReelcraftErrorKind {
        &self.0
    }

    /// Classify the error for the caller.
    pub fn class(&self) -> ErrorClass {
        match self.kind() {
            ReelcraftErrorKind::Validation(_) => ErrorClass::InvalidInput,
            ReelcraftErrorKind::Config(_) => ErrorClass::Configuration,
            ReelcraftErrorKind::Provider(e) if e.kind.is_timeout() => ErrorClass::Timeout,
            ReelcraftErrorKind::Provider(_)
            | ReelcraftErrorKind::EmptyResponse(_)
            | ReelcraftErrorKind::MalformedOutput(_) => ErrorClass::Dependency,
            ReelcraftErrorKind::Json(_) | ReelcraftErrorKind::Builder(_) => ErrorClass::Internal,
        }
    }

    /// Human-readable message without the source location suffix.
    pub fn message(&self) -> String {
        match self.kind() {
            ReelcraftErrorKind::Validation(e) => e.message.clone(),
            ReelcraftErrorKind::Config(e) => e.message.clone(),
            ReelcraftErrorKind::EmptyResponse(e) => {
                format!("{} returned an empty response", e.provider)
            }
            ReelcraftErrorKind::MalformedOutput(e) => e.message.clone(),
            ReelcraftErrorKind::Provider(e) => e.kind.to_string(),
            ReelcraftErrorKind::Json(e) => e.message.clone(),
            ReelcraftErrorKind::Builder(e) => e.message.clone(),
        }
    }
}

// Generic From implementation for any type that converts to ReelcraftErrorKind
impl<T> From<T> for ReelcraftError
where
    T: Into<ReelcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Reelcraft operations.
pub type ReelcraftResult<T> = std::result::Result<T, ReelcraftError>;
