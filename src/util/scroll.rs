//! Smooth scrolling for in-page anchors.
//!
//! A single delegated click listener on the document catches every
//! `a[href^="#"]`, including anchors rendered after startup, so components
//! do not need to wire scrolling themselves.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector for links that may scroll within the page.
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// The element selector an anchor `href` should scroll to.
///
/// Bare `#` (placeholder links) and non-fragment hrefs keep their default
/// behavior and yield `None`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.len() > 1 && href.starts_with('#')).then_some(href)
}

/// Smooth-scroll to the element matching `selector`, if present.
pub fn scroll_to(selector: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(target)) = document.query_selector(selector) else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = selector;
    }
}

/// Install the document-level click handler. Call once after mount.
pub fn install_smooth_scroll() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, closure::Closure};

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            let Some(anchor) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(ANCHOR_SELECTOR).ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if let Some(selector) = anchor_target(&href) {
                ev.prevent_default();
                scroll_to(selector);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);
        if document
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .is_ok()
        {
            cb.forget();
        }
    }
}
