//! Mock LLM provider for testing
//!
//! Deterministic scripted provider so test suites can drive the generation
//! pipeline without network access.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{LlmError, Result};
use crate::provider::{LlmProvider, LlmRequest, LlmResponse};

/// A mock provider that replays a canned response and records the requests
/// it receives.
pub struct MockProvider {
    /// Error to return (None = always succeed)
    fail_with: Mutex<Option<LlmError>>,
    /// Response content to return on success
    success_response: String,
    /// Current call count
    call_count: AtomicUsize,
    /// The prompt from the most recent request
    last_prompt: Mutex<Option<String>>,
}

impl MockProvider {
    /// Create a provider that always succeeds with the given response text
    pub fn always_succeeds(response: &str) -> Self {
        Self {
            fail_with: Mutex::new(None),
            success_response: response.to_string(),
            call_count: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Create a provider that always fails with the given error
    pub fn always_fails(error: LlmError) -> Self {
        Self {
            fail_with: Mutex::new(Some(error)),
            success_response: String::new(),
            call_count: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Get the number of times complete() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the prompt from the most recent request, if any
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(request.prompt);

        let error = self.fail_with.lock().unwrap();
        if let Some(err) = error.as_ref() {
            return Err(clone_error(err));
        }

        Ok(LlmResponse {
            content: self.success_response.clone(),
            model: "mock-model".to_string(),
            usage: None,
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_available(&self) -> Result<()> {
        Ok(())
    }
}

/// Clone an LlmError (needed because LlmError doesn't implement Clone)
fn clone_error(err: &LlmError) -> LlmError {
    match err {
        LlmError::MissingApiKey { provider, env_var } => LlmError::MissingApiKey {
            provider: provider.clone(),
            env_var: env_var.clone(),
        },
        LlmError::ProviderUnavailable(s) => LlmError::ProviderUnavailable(s.clone()),
        LlmError::RateLimited { retry_after } => LlmError::RateLimited {
            retry_after: *retry_after,
        },
        LlmError::ServerOverloaded { message } => LlmError::ServerOverloaded {
            message: message.clone(),
        },
        LlmError::ApiError {
            message,
            status_code,
        } => LlmError::ApiError {
            message: message.clone(),
            status_code: *status_code,
        },
        LlmError::EmptyResponse => LlmError::EmptyResponse,
        LlmError::ConfigError(s) => LlmError::ConfigError(s.clone()),
        LlmError::InvalidPreset(s) => LlmError::InvalidPreset(s.clone()),
        // IO and TOML errors can't be cloned; degrade to a generic error
        LlmError::Io(_) => LlmError::ConfigError("IO error (mock)".to_string()),
        LlmError::TomlParse(_) => LlmError::ConfigError("TOML parse error (mock)".to_string()),
        LlmError::TomlSerialize(_) => {
            LlmError::ConfigError("TOML serialize error (mock)".to_string())
        }
    }
}
