//! Room listing card with an image carousel and a reserve action.
//!
//! DESIGN
//! ======
//! Each card owns its carousel position. Arrow clicks stop propagation so
//! they never reach handlers on the card itself; only RESERVE hands the room
//! up to the page.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::content::Room;
use crate::state::gallery::{CardAction, GalleryState};
use crate::util::format::format_won;

#[component]
pub fn RoomCard(room: Room, on_book: Callback<Room>) -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(room.images.len()));
    let images = room.images;

    let act = move |action: CardAction| {
        if gallery.try_update(|g| g.handle(action)).unwrap_or(false) {
            on_book.run(room);
        }
    };

    let current_image = move || images.get(gallery.with(GalleryState::index)).copied().unwrap_or_default();

    view! {
        <article class="room-card">
            <div class="room-card__media">
                <img class="room-card__image" src=current_image alt=room.name/>

                <div class="room-card__dots">
                    {(0..images.len())
                        .map(|position| {
                            view! {
                                <span
                                    class="room-card__dot"
                                    class:room-card__dot--active=move || gallery.with(|g| g.is_current(position))
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    class="room-card__arrow room-card__arrow--prev"
                    aria-label="Previous image"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        act(CardAction::PreviousImage);
                    }
                >
                    "‹"
                </button>
                <button
                    class="room-card__arrow room-card__arrow--next"
                    aria-label="Next image"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        act(CardAction::NextImage);
                    }
                >
                    "›"
                </button>
            </div>

            <div class="room-card__info">
                <div class="room-card__heading">
                    <h3 class="room-card__name">{room.name}</h3>
                    <span class="room-card__price">{format_won(room.price)}</span>
                </div>
                <p class="room-card__description">{room.description}</p>
                <ul class="room-card__amenities">
                    {room
                        .amenities
                        .iter()
                        .map(|amenity| view! { <li class="room-card__amenity">{*amenity}</li> })
                        .collect_view()}
                </ul>
                <Button
                    variant=ButtonVariant::Outline
                    full_width=true
                    on_click=Callback::new(move |_| act(CardAction::Reserve))
                >
                    "RESERVE"
                </Button>
            </div>
        </article>
    }
}
