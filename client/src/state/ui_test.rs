use super::*;
use crate::content::ROOMS;

fn jane_draft() -> BookingDraft {
    BookingDraft {
        check_in: "2024-01-01".into(),
        check_out: "2024-01-03".into(),
        guests: 2,
        name: "Jane Doe".into(),
        email: "jane@x.com".into(),
    }
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_nothing_open() {
    let state = UiState::default();
    assert!(state.selected_room.is_none());
    assert!(!state.menu_open);
}

// =============================================================
// Menu
// =============================================================

#[test]
fn toggle_menu_flips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = UiState::default();
    state.toggle_menu();
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Booking flow
// =============================================================

#[test]
fn submit_booking_confirms_and_closes_dialog() {
    let mut state = UiState::default();
    state.select_room(Room { name: "The Void", ..ROOMS[0] });

    let message = state.submit_booking(&jane_draft()).unwrap();

    assert!(message.contains("Jane"));
    assert!(message.contains("The Void"));
    assert!(state.selected_room.is_none());
}

#[test]
fn close_booking_discards_selection() {
    let mut state = UiState::default();
    state.select_room(ROOMS[1]);
    state.close_booking();
    assert!(state.selected_room.is_none());
}

#[test]
fn submit_without_selection_yields_nothing() {
    let mut state = UiState::default();
    assert!(state.submit_booking(&jane_draft()).is_none());
}

#[test]
fn selecting_another_room_replaces_the_first() {
    let mut state = UiState::default();
    state.select_room(ROOMS[0]);
    state.select_room(ROOMS[2]);
    assert_eq!(state.selected_room.map(|r| r.id), Some("room-3"));
}
