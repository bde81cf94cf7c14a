//! Entrance gate shown until a credential is selected.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::state::access::AccessState;

#[component]
pub fn GatePage() -> impl IntoView {
    let access = expect_context::<RwSignal<AccessState>>();

    let on_present = Callback::new(move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let host = crate::net::credential::AiStudioHost::detect();
            if let Some(next) = crate::state::access::request_selection(host.as_ref()).await {
                access.set(next);
            }
        });
    });

    view! {
        <div class="gate">
            <div class="gate__card">
                <p class="gate__eyebrow">"Restricted Area"</p>
                <h1 class="gate__title">
                    "STRANGE STAY" <br/> <span class="gate__title-sub">"Entrance"</span>
                </h1>
                <p class="gate__copy">
                    "To enter the Strange Stay experience and converse with our Concierge, "
                    "valid identification (API Key) is required."
                </p>
                <Show when=move || access.get() == AccessState::Checking>
                    <p class="gate__status">"Checking identification..."</p>
                </Show>
                <Button full_width=true class="gate__button" on_click=on_present>
                    "Present Identification (Select Key)"
                </Button>
                <p class="gate__note">
                    "* Please select a paid API key from a valid Google Cloud Project." <br/>
                    <a href="https://ai.google.dev/gemini-api/docs/billing" target="_blank" rel="noreferrer">
                        "Billing Documentation"
                    </a>
                </p>
            </div>
        </div>
    }
}
