//! LLM: multi-provider adapter for the concierge.
//!
//! DESIGN
//! ======
//! Configured from environment variables. The `LlmClient` enum dispatches to
//! Gemini or Anthropic based on `LLM_PROVIDER`; handlers only ever see the
//! `LlmChat` trait so tests can swap in a mock.

pub mod anthropic;
pub mod config;
pub mod gemini;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::LlmChat;
use types::{ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to either Gemini or Anthropic.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
    max_tokens: u32,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables. See
    /// [`LlmConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let model = config.model.clone();
        let inner = match config.provider {
            LlmProviderKind::Gemini => {
                LlmProvider::Gemini(gemini::GeminiClient::new(config.api_key, config.gemini_base_url, config.timeouts)?)
            }
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(config.api_key, config.timeouts)?)
            }
        };
        Ok(Self { inner, model, max_tokens: config.max_tokens })
    }

    /// Return the configured model name (e.g. `"gemini-2.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Output token ceiling applied when the caller does not pass a tighter one.
    #[must_use]
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        let max_tokens = max_tokens.min(self.max_tokens);
        match &self.inner {
            LlmProvider::Gemini(c) => c.chat(&self.model, max_tokens, system, messages).await,
            LlmProvider::Anthropic(c) => c.chat(&self.model, max_tokens, system, messages).await,
        }
    }
}
