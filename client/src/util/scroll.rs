//! Smooth scrolling helpers. Browser-only; SSR paths no-op.

/// Scroll the element with `id` into view.
pub fn scroll_to_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            smooth_into_view(&el);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Scroll `el` into view with smooth behavior.
#[cfg(feature = "hydrate")]
pub fn smooth_into_view(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}
