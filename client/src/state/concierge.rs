//! Concierge chat transcript and send cycle.
//!
//! DESIGN
//! ======
//! The transcript lives as long as the page and starts with a fixed greeting.
//! A send is single-flight: while one question is with the backend, further
//! sends are ignored rather than queued.
//!
//! [`send_message`] runs a whole send cycle against any [`ChatStore`] so the
//! same code drives the Leptos signal in the browser and a `RefCell` in
//! tests. Borrows of the store never span the backend await; a second send
//! started meanwhile observes `loading` and bails out.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::content::CONCIERGE_GREETING;

#[cfg(test)]
#[path = "concierge_test.rs"]
mod concierge_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Model, text: text.into() }
    }
}

/// State for the concierge widget.
#[derive(Clone, Debug)]
pub struct ConciergeState {
    pub open: bool,
    /// Current contents of the input field.
    pub draft: String,
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

impl Default for ConciergeState {
    fn default() -> Self {
        Self { open: false, draft: String::new(), messages: vec![ChatMessage::model(CONCIERGE_GREETING)], loading: false }
    }
}

impl ConciergeState {
    /// Show or hide the panel. The transcript is kept either way.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Start a send from the current draft. Returns the raw text to forward,
    /// or `None` when the draft is blank or a send is already in flight.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.loading || self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::user(text.clone()));
        self.loading = true;
        Some(text)
    }

    /// Record the backend's reply and clear the loading flag.
    pub fn finish_send(&mut self, reply: String) {
        self.messages.push(ChatMessage::model(reply));
        self.loading = false;
    }
}

/// Answers concierge questions. Implementations never fail; failures are
/// turned into a displayable fallback reply.
#[allow(async_fn_in_trait)]
pub trait ConciergeBackend {
    async fn ask(&self, question: &str) -> String;
}

/// Somewhere a [`ConciergeState`] can be read and written in short bursts.
pub trait ChatStore {
    /// Run `f` against the state. `None` when the store is gone.
    fn with_chat<R>(&self, f: impl FnOnce(&mut ConciergeState) -> R) -> Option<R>;
}

impl ChatStore for RefCell<ConciergeState> {
    fn with_chat<R>(&self, f: impl FnOnce(&mut ConciergeState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl ChatStore for RwSignal<ConciergeState> {
    fn with_chat<R>(&self, f: impl FnOnce(&mut ConciergeState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one send cycle. Returns `true` when a question was forwarded.
pub async fn send_message<S, B>(store: &S, backend: &B) -> bool
where
    S: ChatStore,
    B: ConciergeBackend,
{
    let Some(question) = store.with_chat(ConciergeState::begin_send).flatten() else {
        return false;
    };
    let reply = backend.ask(&question).await;
    store.with_chat(|chat| chat.finish_send(reply));
    true
}
