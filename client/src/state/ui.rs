//! Page-level view state owned by the root view.
//!
//! DESIGN
//! ======
//! Keeps the few cross-component concerns (which room is being booked, the
//! mobile menu) in one plain model that components receive from context
//! rather than reaching for globals.

use crate::content::Room;
use crate::state::booking::{BookingDraft, confirmation_message};

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Root view state for the main page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Room whose booking dialog is open. At most one at a time.
    pub selected_room: Option<Room>,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Open the booking dialog for `room`.
    pub fn select_room(&mut self, room: Room) {
        self.selected_room = Some(room);
    }

    /// Close the booking dialog without side effects.
    pub fn close_booking(&mut self) {
        self.selected_room = None;
    }

    /// Accept a submitted draft: close the dialog and return the confirmation
    /// text. Returns `None` when no dialog was open.
    pub fn submit_booking(&mut self, draft: &BookingDraft) -> Option<String> {
        let room = self.selected_room.take()?;
        Some(confirmation_message(draft, &room))
    }
}
