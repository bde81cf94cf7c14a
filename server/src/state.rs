//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It is built once at startup and never mutated afterwards: the only thing
//! it carries is the optional model client behind the concierge.

use std::sync::Arc;

use crate::llm::LlmChat;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the inner client is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn LlmChat>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self { llm }
    }

    /// Whether the concierge can reach a model at all.
    #[must_use]
    pub fn llm_configured(&self) -> bool {
        self.llm.is_some()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;
    use crate::llm::types::{ChatResponse, LlmError, Message};

    /// LLM double that always answers with the same text and records every
    /// `(system, messages)` pair it receives.
    pub struct MockLlm {
        reply: String,
        calls: Mutex<Vec<(String, Vec<Message>)>>,
    }

    impl MockLlm {
        #[must_use]
        pub fn replying(reply: &str) -> Self {
            Self { reply: reply.to_owned(), calls: Mutex::new(Vec::new()) }
        }

        #[must_use]
        pub fn calls(&self) -> Vec<(String, Vec<Message>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl LlmChat for MockLlm {
        async fn chat(&self, _max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
            self.calls
                .lock()
                .unwrap()
                .push((system.to_owned(), messages.to_vec()));
            Ok(ChatResponse { text: self.reply.clone(), model: "mock".into(), input_tokens: 10, output_tokens: 5 })
        }
    }

    /// LLM double whose provider is always unavailable.
    pub struct FailingLlm;

    #[async_trait::async_trait]
    impl LlmChat for FailingLlm {
        async fn chat(&self, _max_tokens: u32, _system: &str, _messages: &[Message]) -> Result<ChatResponse, LlmError> {
            Err(LlmError::ApiResponse { status: 503, body: "overloaded".into() })
        }
    }

    /// Create a test `AppState` without a model.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// Create a test `AppState` with a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn LlmChat>) -> AppState {
        AppState::new(Some(llm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_llm() {
        assert!(!AppState::default().llm_configured());
    }

    #[test]
    fn state_with_llm_is_configured() {
        let state = test_helpers::test_app_state_with_llm(Arc::new(test_helpers::MockLlm::replying("hi")));
        assert!(state.llm_configured());
    }

    #[test]
    fn clones_share_the_same_client() {
        let llm: Arc<dyn LlmChat> = Arc::new(test_helpers::FailingLlm);
        let state = AppState::new(Some(llm.clone()));
        let copy = state.clone();
        assert_eq!(Arc::strong_count(&llm), 3);
        drop(copy);
        assert_eq!(Arc::strong_count(&llm), 2);
    }
}
