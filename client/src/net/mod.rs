//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the server, `credential` talks to the optional
//! host credential object, and `types` defines the JSON bodies.

pub mod api;
pub mod credential;
pub mod types;
