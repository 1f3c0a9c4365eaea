//! Scripted model driver.

use async_trait::async_trait;
use reelcraft_core::{GenerateRequest, GenerateResponse};
use reelcraft_error::{ConfigError, ProviderError, ProviderErrorKind, ReelcraftResult};
use reelcraft_interface::ModelDriver;
use std::sync::Mutex;
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given response
    Always(MockResponse),
    /// Return responses in order; calls past the end fail
    Sequence(Vec<MockResponse>),
}

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text
    Text(String),
    /// Return no content
    Empty,
    /// Fail with this provider error
    Error(ProviderErrorKind),
}

/// Mock driver that records every request it receives.
pub struct MockDriver {
    behavior: MockBehavior,
    provider: &'static str,
    configured: bool,
    delay: Duration,
    requests: Mutex<Vec<GenerateRequest>>,
}

#[allow(dead_code)]
impl MockDriver {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            provider: "mock",
            configured: true,
            delay: Duration::from_millis(1),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Always(MockResponse::Text(text.into())))
    }

    /// Always return an empty response.
    pub fn new_empty() -> Self {
        Self::with_behavior(MockBehavior::Always(MockResponse::Empty))
    }

    /// Always fail with `error`.
    pub fn new_error(error: ProviderErrorKind) -> Self {
        Self::with_behavior(MockBehavior::Always(MockResponse::Error(error)))
    }

    /// Answer from a script.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::with_behavior(MockBehavior::Sequence(responses))
    }

    /// Report as missing credentials.
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Provider name reported by the driver.
    pub fn named(mut self, provider: &'static str) -> Self {
        self.provider = provider;
        self
    }

    /// Wait this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Concatenated message contents of the most recent request.
    pub fn last_prompt(&self) -> Option<String> {
        self.requests.lock().unwrap().last().map(|r| {
            r.messages()
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
    }

    fn next_response(&self, call_index: usize) -> MockResponse {
        match &self.behavior {
            MockBehavior::Always(response) => response.clone(),
            MockBehavior::Sequence(responses) => responses.get(call_index).cloned().unwrap_or_else(|| {
                MockResponse::Error(ProviderErrorKind::Http {
                    provider: self.provider.to_string(),
                    message: format!("Mock sequence exhausted (call {})", call_index + 1),
                })
            }),
        }
    }
}

#[async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        let call_index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(req.clone());
            requests.len() - 1
        };

        tokio::time::sleep(self.delay).await;

        match self.next_response(call_index) {
            MockResponse::Text(text) => Ok(GenerateResponse::text(text)),
            MockResponse::Empty => Ok(GenerateResponse::empty()),
            MockResponse::Error(kind) => Err(ProviderError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.provider
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn ensure_configured(&self) -> ReelcraftResult<()> {
        if self.configured {
            Ok(())
        } else {
            Err(ConfigError::new(format!("{} API key not set", self.provider)).into())
        }
    }
}
