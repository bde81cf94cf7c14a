//! Concierge route.
//!
//! `POST /api/concierge` takes the guest's raw text and answers with a
//! displayable reply. Provider failures never surface as HTTP errors; the
//! only rejection is a blank question, which the UI never sends.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::{ConciergeReply, ConciergeRequest};
use tracing::info;

use crate::services::concierge;
use crate::state::AppState;

/// `POST /api/concierge`: ask the concierge one question.
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<ConciergeRequest>,
) -> Result<Json<ConciergeReply>, StatusCode> {
    if body.message.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    info!(message_len = body.message.len(), llm = state.llm_configured(), "concierge: question received");

    let reply = concierge::ask(state.llm.as_ref(), &body.message).await;
    Ok(Json(ConciergeReply { reply }))
}

#[cfg(test)]
#[path = "concierge_test.rs"]
mod tests;
