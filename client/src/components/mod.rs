//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and interaction surfaces. Cross-component
//! state is read from Leptos context or passed in as props and callbacks.

pub mod booking_modal;
pub mod button;
pub mod concierge;
pub mod experience;
pub mod hero;
pub mod nav_bar;
pub mod room_card;
pub mod site_footer;
