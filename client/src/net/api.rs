//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! The concierge call never surfaces an error. Transport, status, and decode
//! failures are logged to the console and replaced by the fallback reply.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::content::CONCIERGE_FALLBACK_REPLY;
use crate::state::concierge::ConciergeBackend;

#[cfg(any(test, feature = "hydrate"))]
const CONCIERGE_ENDPOINT: &str = "/api/concierge";

#[cfg(any(test, feature = "hydrate"))]
fn concierge_failed_message(status: u16) -> String {
    format!("concierge request failed: {status}")
}

/// Ask the server-side concierge. Always returns displayable text.
pub async fn ask_concierge(question: &str) -> String {
    match request_concierge(question).await {
        Ok(reply) => reply,
        Err(e) => {
            #[cfg(feature = "hydrate")]
            log::error!("concierge: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            CONCIERGE_FALLBACK_REPLY.to_owned()
        }
    }
}

async fn request_concierge(question: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::ConciergeRequest { message: question.to_owned() };
        let resp = gloo_net::http::Request::post(CONCIERGE_ENDPOINT)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(concierge_failed_message(resp.status()));
        }
        let reply: super::types::ConciergeReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available on server".to_owned())
    }
}

/// Concierge backend that goes through the server API.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpConcierge;

impl ConciergeBackend for HttpConcierge {
    async fn ask(&self, question: &str) -> String {
        ask_concierge(question).await
    }
}
