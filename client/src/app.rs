//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::credential::AiStudioHost;
use crate::pages::{gate::GatePage, home::HomePage};
use crate::state::{access::AccessState, concierge::ConciergeState, ui::UiState};

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Attribute set on `<html>` while a credential host may still refuse entry.
pub const GATE_PENDING_ATTR: &str = "data-gate-pending";

/// Runs before first paint. Inside a credential host the server-rendered main
/// page stays hidden (see `.home` in the stylesheet) until hydration takes
/// over the gate.
pub const GATE_PENDING_SCRIPT: &str =
    "if (window.aistudio) document.documentElement.setAttribute('data-gate-pending', '');";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script>{GATE_PENDING_SCRIPT}</script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page-level state and provides it to child components. The
/// server has no credential host, so SSR always renders as granted; after
/// hydration a detected host re-gates the page until its check resolves.
/// Between first paint and hydration the main page is hidden by
/// [`GATE_PENDING_SCRIPT`], so a host visitor sees a blank page rather than
/// rooms they may not be allowed into.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let access = RwSignal::new(AccessState::initial(None::<&AiStudioHost>));
    let ui = RwSignal::new(UiState::default());
    let concierge = RwSignal::new(ConciergeState::default());

    provide_context(access);
    provide_context(ui);
    provide_context(concierge);

    // One-shot credential check on mount.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let host = AiStudioHost::detect();
        if let Some(host) = &host {
            access.set(AccessState::initial(Some(host)));
        }
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.remove_attribute(GATE_PENDING_ATTR);
        }
        let Some(host) = host else {
            return;
        };
        leptos::task::spawn_local(async move {
            let has_key = crate::state::access::check_credential(Some(&host)).await;
            access.update(|a| *a = a.resolve(has_key));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/strange-stay.css"/>
        <Title text="Strange Stay"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Entrance/>
            </Routes>
        </Router>
    }
}

/// Gate or main page depending on access.
#[component]
fn Entrance() -> impl IntoView {
    let access = expect_context::<RwSignal<AccessState>>();
    move || {
        if access.get().is_granted() {
            view! { <HomePage/> }.into_any()
        } else {
            view! { <GatePage/> }.into_any()
        }
    }
}
