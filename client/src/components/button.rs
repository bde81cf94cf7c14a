//! Shared button with the site's three visual variants.

use leptos::prelude::*;

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn--primary",
            Self::Secondary => "btn--secondary",
            Self::Outline => "btn--outline",
        }
    }
}

/// Full class list for a button.
#[must_use]
pub fn button_class(variant: ButtonVariant, full_width: bool, extra: &str) -> String {
    let mut class = format!("btn {}", variant.class());
    if full_width {
        class.push_str(" btn--full");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] class: String,
    #[prop(default = "button")] kind: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, full_width, &class);
    view! {
        <button
            class=class
            type=kind
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
