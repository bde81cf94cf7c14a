//! Main page: navigation, hero, rooms, experience, footer, plus the booking
//! dialog and concierge overlays.
//!
//! ARCHITECTURE
//! ============
//! The page owns the booking flow. Cards hand a room up through `on_book`,
//! the dialog hands its draft up through `on_submit`, and the page turns
//! that into a confirmation and closes the dialog.

use leptos::prelude::*;

use crate::components::booking_modal::BookingModal;
use crate::components::concierge::Concierge;
use crate::components::experience::Experience;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::room_card::RoomCard;
use crate::components::site_footer::SiteFooter;
use crate::content::{ROOMS, Room};
use crate::state::booking::BookingDraft;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let selected_room = Memo::new(move |_| ui.with(|u| u.selected_room));

    let on_book = Callback::new(move |room: Room| ui.update(|u| u.select_room(room)));
    let on_close = Callback::new(move |()| ui.update(UiState::close_booking));
    let on_submit = Callback::new(move |draft: BookingDraft| {
        let Some(message) = ui.try_update(|u| u.submit_booking(&draft)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            log::info!("booking submitted: {}", serde_json::to_string(&draft).unwrap_or_default());
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = message;
    });

    view! {
        <div class="home">
            <NavBar/>
            <Hero/>

            <section id="rooms" class="rooms">
                <div class="rooms__header">
                    <h2 class="section-title">"SELECT YOUR ROOM"</h2>
                    <span class="rooms__count">{format!("01 — {:02}", ROOMS.len())}</span>
                </div>
                <div class="rooms__grid">
                    {ROOMS.iter().map(|room| view! { <RoomCard room=*room on_book=on_book/> }).collect_view()}
                </div>
            </section>

            <Experience/>
            <SiteFooter/>

            {move || selected_room.get().map(|room| view! { <BookingModal room=room on_close=on_close on_submit=on_submit/> })}

            <Concierge/>
        </div>
    }
}
