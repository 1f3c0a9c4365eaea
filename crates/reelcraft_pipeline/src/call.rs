//! A single model call under a deadline.

use reelcraft_core::GenerateRequest;
use reelcraft_error::{EmptyResponseError, ProviderError, ReelcraftResult};
use reelcraft_interface::ModelDriver;
use std::time::Duration;
use tracing::warn;

/// Default per-call deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Send `req` once and return its non-blank text.
///
/// Deadline expiry becomes a provider timeout error; a response without
/// usable text becomes an empty-response error.
pub(crate) async fn call_for_text<D: ModelDriver + ?Sized>(
    driver: &D,
    req: &GenerateRequest,
    timeout: Duration,
) -> ReelcraftResult<String> {
    let provider = driver.provider_name();

    let response = match tokio::time::timeout(timeout, driver.generate(req)).await {
        Ok(result) => result?,
        Err(_) => {
            warn!(provider, timeout_secs = timeout.as_secs(), "Model call timed out");
            return Err(ProviderError::timeout(provider, timeout.as_secs()).into());
        }
    };

    match response.usable_text() {
        Some(text) => Ok(text.to_string()),
        None => {
            warn!(provider, "Model returned no text");
            Err(EmptyResponseError::new(provider).into())
        }
    }
}
