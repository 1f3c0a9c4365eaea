//! Model provider error types.

/// Provider-side failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Failed to construct the provider client
    #[display("Failed to create {} client: {}", provider, message)]
    ClientCreation {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
    /// Transport failure (connection refused, TLS, body decode, ...)
    #[display("{} request failed: {}", provider, message)]
    Http {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
    /// Provider answered with a non-success status
    #[display("{} API error {}: {}", provider, status, message)]
    Api {
        /// Provider name
        provider: String,
        /// HTTP status code, when the provider exposed one
        status: u16,
        /// Error message returned by the provider
        message: String,
    },
    /// The call did not finish within its deadline
    #[display("{} did not respond within {}s", provider, timeout_secs)]
    Timeout {
        /// Provider name
        provider: String,
        /// Deadline that expired, in seconds
        timeout_secs: u64,
    },
}

impl ProviderErrorKind {
    /// Name of the provider this error came from.
    pub fn provider(&self) -> &str {
        match self {
            Self::ClientCreation { provider, .. }
            | Self::Http { provider, .. }
            | Self::Api { provider, .. }
            | Self::Timeout { provider, .. } => provider,
        }
    }

    /// Whether the failure was a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use reelcraft_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Api {
///     provider: "openai".to_string(),
///     status: 503,
///     message: "overloaded".to_string(),
/// });
/// assert!(format!("{}", err).contains("openai API error 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Deadline expiry for `provider` after `timeout_secs`.
    #[track_caller]
    pub fn timeout(provider: impl Into<String>, timeout_secs: u64) -> Self {
        Self::new(ProviderErrorKind::Timeout {
            provider: provider.into(),
            timeout_secs,
        })
    }
}
