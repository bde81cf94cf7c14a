//! Fixed top navigation with a fullscreen mobile menu.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::content::NAV_LINKS;
use crate::state::ui::UiState;
use crate::util::scroll::scroll_to_id;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = Memo::new(move |_| ui.with(|u| u.menu_open));

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href="#" class="nav-bar__brand">"Strange Stay"</a>

                <div class="nav-bar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! { <a href=link.href class="nav-bar__link">{link.label}</a> })
                        .collect_view()}
                    <Button
                        class="nav-bar__cta"
                        on_click=Callback::new(move |_| scroll_to_id("rooms"))
                    >
                        "Book Now"
                    </Button>
                </div>

                <button
                    class="nav-bar__toggle"
                    class:nav-bar__toggle--open=move || menu_open.get()
                    aria-label="Toggle menu"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                >
                    <span class="nav-bar__toggle-line"></span>
                    <span class="nav-bar__toggle-line"></span>
                    <span class="nav-bar__toggle-line"></span>
                </button>
            </div>

            <div class="nav-bar__mobile" class:nav-bar__mobile--open=move || menu_open.get()>
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                class="nav-bar__mobile-link"
                                on:click=move |_| ui.update(UiState::close_menu)
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
