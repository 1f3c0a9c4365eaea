//! Request assembly errors.

/// A provider request could not be assembled from its parts.
///
/// Wraps the message of a `derive_builder` build failure. The pipeline
/// treats it as an internal fault, never as a caller mistake.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", message, line, file)]
pub struct BuilderError {
    /// What the builder rejected
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl BuilderError {
    /// Create a new BuilderError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
