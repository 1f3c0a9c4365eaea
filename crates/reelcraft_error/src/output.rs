//! Errors about the content a model returned.

/// The provider answered, but the answer held no usable text.
///
/// # Examples
///
/// ```
/// use reelcraft_error::EmptyResponseError;
///
/// let err = EmptyResponseError::new("gemini");
/// assert!(format!("{}", err).contains("gemini returned an empty response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Empty Response: {} returned an empty response at line {} in {}", provider, line, file)]
pub struct EmptyResponseError {
    /// Provider that returned nothing
    pub provider: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EmptyResponseError {
    /// Create a new EmptyResponseError at the current location.
    #[track_caller]
    pub fn new(provider: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            provider: provider.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Model output could not be parsed as JSON of the expected shape, even after
/// fence-stripping.
///
/// Carries the raw text for diagnostics.
///
/// # Examples
///
/// ```
/// use reelcraft_error::MalformedOutputError;
///
/// let err = MalformedOutputError::new("expected value at line 1 column 1", "not json at all");
/// assert_eq!(err.raw, "not json at all");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Malformed Output: {} at line {} in {}", message, line, file)]
pub struct MalformedOutputError {
    /// Parser error message
    pub message: String,
    /// The offending model output, verbatim
    pub raw: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MalformedOutputError {
    /// Create a new MalformedOutputError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>, raw: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            raw: raw.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
