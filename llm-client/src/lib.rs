//! Shared LLM client library for the flashgen workspace
//!
//! Provides a unified interface over hosted generation providers:
//! - Gemini (Google Generative Language API)
//! - Mock (deterministic scripted provider for tests)

pub mod config;
pub mod error;
pub mod provider;
pub mod providers;

pub use config::{Config, ModelPreset, ProviderConfig};
pub use error::{LlmError, Result};
pub use provider::{LlmProvider, LlmRequest, LlmResponse, TokenUsage};
pub use providers::{GeminiProvider, MockProvider, ProviderKind, get_provider};
