/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working()` - Always succeeds, tagging the text with the target language
 * - `MockProvider::intermittent(n)` - Fails every n-th request
 * - `MockProvider::failing()` - Always fails with a generic API error
 * - `MockProvider::fail_target(code)` - Fails only for one target language
 * - `MockProvider::quota_exceeded()` / `MockProvider::unauthorized()` - Terminal failures
 *
 * Every request is recorded so tests can assert on call counts and order.
 */

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{Provider, ProviderUsage};

/// A request received by the mock
#[derive(Debug, Clone, PartialEq)]
pub struct MockRequest {
    /// The text to translate
    pub text: String,
    /// Source language code, if sent
    pub source_language: Option<String>,
    /// Target language code
    pub target_language: String,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with a generic error
    Failing,
    /// Fails only for requests into this target language
    FailTarget { target: &'static str },
    /// Always reports an exhausted quota
    QuotaExceeded,
    /// Always rejects the credential
    Unauthorized,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter shared between clones
    request_count: Arc<AtomicUsize>,
    /// Every request received, in order
    requests: Arc<Mutex<Vec<MockRequest>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&MockRequest) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create an intermittently failing mock provider
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock provider that fails only for `target`
    pub fn fail_target(target: &'static str) -> Self {
        Self::new(MockBehavior::FailTarget { target })
    }

    pub fn quota_exceeded() -> Self {
        Self::new(MockBehavior::QuotaExceeded)
    }

    pub fn unauthorized() -> Self {
        Self::new(MockBehavior::Unauthorized)
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&MockRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of translate calls received
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the received requests
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests.lock().clone()
    }

    /// Default translation: the text tagged with the target language
    pub fn tag(text: &str, target_language: &str) -> String {
        format!("[{}] {}", target_language, text)
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            request_count: Arc::clone(&self.request_count),
            requests: Arc::clone(&self.requests),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        source_language: Option<&str>,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        let request = MockRequest {
            text: text.to_string(),
            source_language: source_language.map(str::to_string),
            target_language: target_language.to_string(),
        };
        self.requests.lock().push(request.clone());

        let respond = |request: &MockRequest| match self.custom_response {
            Some(generator) => generator(request),
            None => Self::tag(&request.text, &request.target_language),
        };

        match self.behavior {
            MockBehavior::Working => Ok(respond(&request)),

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                        status_code: 503,
                    })
                } else {
                    Ok(respond(&request))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::FailTarget { target } if target == target_language => {
                Err(ProviderError::ApiError {
                    message: format!("Simulated failure for {}", target_language),
                    status_code: 500,
                })
            }

            MockBehavior::FailTarget { .. } => Ok(respond(&request)),

            MockBehavior::QuotaExceeded => Err(ProviderError::QuotaExceeded(
                "Simulated quota exhaustion".to_string(),
            )),

            MockBehavior::Unauthorized => Err(ProviderError::AuthenticationError(
                "Simulated invalid key".to_string(),
            )),
        }
    }

    async fn usage(&self) -> Result<ProviderUsage, ProviderError> {
        match self.behavior {
            MockBehavior::Unauthorized => Err(ProviderError::AuthenticationError(
                "Simulated invalid key".to_string(),
            )),
            _ => Ok(ProviderUsage {
                character_count: 0,
                character_limit: 500_000,
            }),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
