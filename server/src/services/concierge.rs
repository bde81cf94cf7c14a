//! Concierge service: guest question → persona-framed model reply.
//!
//! DESIGN
//! ======
//! One question in, one displayable string out. The persona travels as the
//! system instruction and the guest's text is sent untouched as the only
//! user turn. No history, no retries: every failure collapses into one of
//! two fixed fallback lines, and the cause only reaches the log.

use std::sync::Arc;

use client::content::{CONCIERGE_EMPTY_REPLY, CONCIERGE_FALLBACK_REPLY, CONCIERGE_PERSONA};
use tracing::{info, warn};

use crate::llm::LlmChat;
use crate::llm::types::{LlmError, Message};

const CONCIERGE_MAX_TOKENS: u32 = 512;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Ask the concierge. Never fails: errors become the fallback reply and an
/// empty model answer becomes the empty-reply line.
pub async fn ask(llm: Option<&Arc<dyn LlmChat>>, message: &str) -> String {
    match generate_reply(llm, message).await {
        Ok(text) if text.is_empty() => CONCIERGE_EMPTY_REPLY.to_owned(),
        Ok(text) => text,
        Err(e) => {
            let retryable = matches!(&e, ConciergeError::Llm(inner) if inner.retryable());
            warn!(error = %e, retryable, "concierge: falling back");
            CONCIERGE_FALLBACK_REPLY.to_owned()
        }
    }
}

/// Send the persona and the guest text to the model and return its raw text.
///
/// # Errors
///
/// [`ConciergeError::LlmNotConfigured`] when the server started without a
/// model, otherwise whatever the provider call returned.
pub async fn generate_reply(llm: Option<&Arc<dyn LlmChat>>, message: &str) -> Result<String, ConciergeError> {
    let llm = llm.ok_or(ConciergeError::LlmNotConfigured)?;
    let messages = [Message::user(message)];

    let response = llm
        .chat(CONCIERGE_MAX_TOKENS, CONCIERGE_PERSONA, &messages)
        .await?;

    info!(
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        reply_len = response.text.len(),
        "concierge: LLM response"
    );

    Ok(response.text)
}

#[cfg(test)]
#[path = "concierge_test.rs"]
mod tests;
