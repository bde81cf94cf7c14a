//! Floating concierge chat widget.

use leptos::prelude::*;

use crate::state::concierge::{ChatRole, ConciergeState};

/// Toggle button plus the chat window. The transcript lives in context so it
/// survives closing and reopening the window.
#[component]
pub fn Concierge() -> impl IntoView {
    let chat = expect_context::<RwSignal<ConciergeState>>();
    let end_ref = NodeRef::<leptos::html::Div>::new();
    let open = Memo::new(move |_| chat.with(|c| c.open));
    let loading = Memo::new(move |_| chat.with(|c| c.loading));

    // Follow the newest message.
    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.open));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = end_ref.get() {
                crate::util::scroll::smooth_into_view(&el);
            }
        }
    });

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::state::concierge::send_message(&chat, &crate::net::api::HttpConcierge).await;
        });
    };

    view! {
        <button
            class="concierge__fab"
            aria-label="Open Concierge"
            on:click=move |_| chat.update(ConciergeState::toggle_open)
        >
            {move || if open.get() { "⌄" } else { "💬" }}
        </button>

        <Show when=move || open.get()>
            <div class="concierge">
                <div class="concierge__header">
                    <h3>"STRANGE CONCIERGE"</h3>
                </div>

                <div class="concierge__messages">
                    {move || {
                        chat.with(|c| {
                            c.messages
                                .iter()
                                .map(|msg| {
                                    let is_user = msg.role == ChatRole::User;
                                    let text = msg.text.clone();
                                    view! {
                                        <div class="concierge__row" class:concierge__row--user=is_user>
                                            <div class="concierge__bubble" class:concierge__bubble--user=is_user>
                                                {text}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                    }}
                    {move || {
                        loading
                            .get()
                            .then(|| {
                                view! {
                                    <div class="concierge__row">
                                        <div class="concierge__bubble concierge__bubble--typing">"Typing..."</div>
                                    </div>
                                }
                            })
                    }}
                    <div node_ref=end_ref></div>
                </div>

                <form class="concierge__input-row" on:submit=on_send>
                    <input
                        class="concierge__input"
                        type="text"
                        placeholder="Ask anything..."
                        prop:value=move || chat.with(|c| c.draft.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            chat.update(|c| c.draft = value);
                        }
                    />
                    <button class="concierge__send" type="submit" disabled=move || loading.get()>
                        "Send"
                    </button>
                </form>
            </div>
        </Show>
    }
}
