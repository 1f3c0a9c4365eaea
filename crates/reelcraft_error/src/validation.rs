//! Request validation errors.

/// A required request field is missing, empty, or holds an unknown value.
///
/// # Examples
///
/// ```
/// use reelcraft_error::ValidationError;
///
/// let err = ValidationError::new("platforms", "at least one platform is required");
/// assert_eq!(err.field, "platforms");
/// assert!(format!("{}", err).contains("at least one platform"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", message, line, file)]
pub struct ValidationError {
    /// Name of the offending request field (wire name)
    pub field: String,
    /// What is wrong with it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError for `field` at the current location.
    #[track_caller]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
