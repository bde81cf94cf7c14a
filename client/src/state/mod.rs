//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (`access`, `booking`, `concierge`, etc.) so
//! individual components depend on small focused models. Each model is plain
//! Rust; the root view wraps them in signals and hands them down.

pub mod access;
pub mod booking;
pub mod concierge;
pub mod gallery;
pub mod ui;
