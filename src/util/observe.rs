//! Viewport-driven effects: lazy image loading and section reveal.
//!
//! Both use `IntersectionObserver` and unobserve each element after its
//! first intersection. Without observer support, images load immediately
//! and sections simply render without the entrance animation.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Images deferred until they scroll into view.
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Entrance animation for page sections.
pub const SECTION_ANIMATION: &str = "fadeInUp 0.8s ease forwards";

/// Fraction of a section that must be visible before it animates.
pub const SECTION_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so sections animate slightly after entering.
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -100px 0px";

#[cfg(feature = "csr")]
type EntryCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

#[cfg(feature = "csr")]
fn supports_observer(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

#[cfg(feature = "csr")]
fn elements(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Run `on_visible` once per element, the first time it intersects.
#[cfg(feature = "csr")]
fn observe_once<F>(
    targets: &[web_sys::Element],
    options: Option<&web_sys::IntersectionObserverInit>,
    on_visible: F,
) where
    F: Fn(&web_sys::Element) + 'static,
{
    let cb: EntryCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let observer = match options {
        Some(init) => web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), init),
        None => web_sys::IntersectionObserver::new(cb.as_ref().unchecked_ref()),
    };
    let Ok(observer) = observer else {
        log::warn!("observe: IntersectionObserver construction failed");
        return;
    };
    cb.forget();
    for target in targets {
        observer.observe(target);
    }
}

#[cfg(feature = "csr")]
fn load_image(img: &web_sys::Element) {
    if let Some(src) = img.get_attribute("data-src") {
        if img.set_attribute("src", &src).is_err() {
            log::warn!("observe: could not set src for {src}");
        }
    }
}

#[cfg(feature = "csr")]
fn reveal(section: &web_sys::Element) {
    if let Some(el) = section.dyn_ref::<web_sys::HtmlElement>() {
        if el.style().set_property("animation", SECTION_ANIMATION).is_err() {
            log::warn!("observe: could not animate section");
        }
    }
}

/// Swap `data-src` into `src` for every deferred image as it becomes visible.
pub fn lazy_load_images() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let images = elements(&document, LAZY_IMAGE_SELECTOR);
        if !supports_observer(&window) {
            images.iter().for_each(load_image);
            return;
        }
        observe_once(&images, None, load_image);
        log::debug!("observe: {} lazy images", images.len());
    }
}

/// Animate each `<section>` in the first time it scrolls into view.
pub fn reveal_sections() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if !supports_observer(&window) {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(SECTION_THRESHOLD));
        init.set_root_margin(SECTION_ROOT_MARGIN);
        observe_once(&elements(&document, "section"), Some(&init), reveal);
    }
}
