//! Reservation dialog for a single room.
//!
//! Required fields are enforced by native form validation (`required`,
//! `type="email"`, `type="date"`); nothing here second-guesses the browser.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::content::Room;
use crate::state::booking::{BookingDraft, guest_options};
use crate::util::format::format_won;

#[component]
pub fn BookingModal(room: Room, on_close: Callback<()>, on_submit: Callback<BookingDraft>) -> impl IntoView {
    let draft = RwSignal::new(BookingDraft::default());
    let capacity = room.capacity;

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get_untracked());
    };

    view! {
        <div class="booking-modal__backdrop">
            <div class="booking-modal" role="dialog" aria-modal="true">
                <button class="booking-modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>

                <div class="booking-modal__header">
                    <h2>"RESERVATION"</h2>
                    <p class="booking-modal__subtitle">
                        "Booking: " <span class="booking-modal__room">{room.name}</span>
                    </p>
                </div>

                <form class="booking-modal__form" on:submit=on_form_submit>
                    <div class="booking-modal__row">
                        <label class="booking-modal__field">
                            <span class="booking-modal__label">"Check In"</span>
                            <input
                                type="date"
                                name="checkIn"
                                required
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.check_in = value);
                                }
                            />
                        </label>
                        <label class="booking-modal__field">
                            <span class="booking-modal__label">"Check Out"</span>
                            <input
                                type="date"
                                name="checkOut"
                                required
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.check_out = value);
                                }
                            />
                        </label>
                    </div>

                    <label class="booking-modal__field">
                        <span class="booking-modal__label">"Guests"</span>
                        <select
                            name="guests"
                            prop:value=move || draft.with(|d| d.guests.to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_guests_from_input(&value, capacity));
                            }
                        >
                            {guest_options(capacity)
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value.to_string()>{label}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="booking-modal__field">
                        <span class="booking-modal__label">"Name"</span>
                        <input
                            type="text"
                            name="name"
                            required
                            placeholder="Your full name"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                            }
                        />
                    </label>

                    <label class="booking-modal__field">
                        <span class="booking-modal__label">"Email"</span>
                        <input
                            type="email"
                            name="email"
                            required
                            placeholder="hello@example.com"
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.email = value);
                            }
                        />
                    </label>

                    <div class="booking-modal__actions">
                        <Button kind="submit" full_width=true>
                            {format!("CONFIRM BOOKING — {}", format_won(room.price))}
                        </Button>
                    </div>
                </form>
            </div>
        </div>
    }
}
