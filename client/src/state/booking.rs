//! Booking dialog draft.
//!
//! DESIGN
//! ======
//! The draft is local to one open dialog and dropped when the dialog closes.
//! Required-field checks are left to the browser's native form validation;
//! the only rule enforced here is that the guest count stays within the
//! room's capacity.

use serde::Serialize;

use crate::content::Room;

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

/// Stay details collected by the booking dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub check_in: String,
    pub check_out: String,
    pub guests: u32,
    pub name: String,
    pub email: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self { check_in: String::new(), check_out: String::new(), guests: 1, name: String::new(), email: String::new() }
    }
}

impl BookingDraft {
    /// Set the guest count, clamped to `1..=capacity`.
    pub fn set_guests(&mut self, guests: u32, capacity: u32) {
        self.guests = guests.clamp(1, capacity.max(1));
    }

    /// Parse the `<select>` value and clamp it. Unparseable input leaves the
    /// count unchanged.
    pub fn set_guests_from_input(&mut self, raw: &str, capacity: u32) {
        if let Ok(guests) = raw.trim().parse::<u32>() {
            self.set_guests(guests, capacity);
        }
    }
}

/// Options for the guest picker: `(value, label)` from 1 to `capacity`.
#[must_use]
pub fn guest_options(capacity: u32) -> Vec<(u32, String)> {
    (1..=capacity.max(1))
        .map(|n| {
            let label = if n == 1 { "1 Person".to_owned() } else { format!("{n} Persons") };
            (n, label)
        })
        .collect()
}

/// Text shown to the guest once a booking is submitted.
#[must_use]
pub fn confirmation_message(draft: &BookingDraft, room: &Room) -> String {
    format!("Thank you, {}. Your stay at {} is confirmed.", draft.name, room.name)
}
