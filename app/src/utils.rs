//! Small browser helpers shared across components

use folio_core::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

pub use folio_types::formatting;

/// Wall clock in milliseconds
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current window scroll offset in px
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Viewport size in CSS pixels
pub fn viewport_size(window: &web_sys::Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height)
}

/// Smooth-scroll to the element with `id`. Returns `false` when the element
/// is not on the current page.
pub fn scroll_to_section(id: &str) -> bool {
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(element) = document.get_element_by_id(id)
    {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        return true;
    }
    false
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn local_storage_get(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

pub fn local_storage_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window()
        && let Ok(Some(storage)) = window.local_storage()
        && let Err(e) = storage.set_item(key, value)
    {
        tracing::warn!(key, error = ?e, "Failed to write local storage");
    }
}

/// Font Awesome classes for an icon key used in the portfolio document
pub fn icon_class(key: &str) -> &'static str {
    match key.to_lowercase().as_str() {
        "mail" | "email" => "fa-solid fa-envelope",
        "phone" => "fa-solid fa-phone",
        "mappin" | "location" => "fa-solid fa-location-dot",
        "github" => "fa-brands fa-github",
        "linkedin" => "fa-brands fa-linkedin",
        "twitter" | "x" => "fa-brands fa-x-twitter",
        "globe" | "website" => "fa-solid fa-globe",
        _ => "fa-solid fa-arrow-up-right-from-square",
    }
}

/// Open links outside the site in a new tab
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

// ─────────────────────────────────────────────────────────────────────────────
// Event listeners
// ─────────────────────────────────────────────────────────────────────────────

/// A DOM event listener that is removed when dropped.
///
/// Keep it alive for as long as the handler should run, typically in a
/// `use_hook` or a signal owned by the component.
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new(
        target: web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target,
            event,
            callback,
        })
    }

    /// Listen on `window`
    pub fn window(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(window.into(), event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_class() {
        assert_eq!(icon_class("mail"), "fa-solid fa-envelope");
        assert_eq!(icon_class("mapPin"), "fa-solid fa-location-dot");
        assert_eq!(icon_class("GitHub"), "fa-brands fa-github");
        assert_eq!(icon_class("unknown"), "fa-solid fa-arrow-up-right-from-square");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://github.com/example"));
        assert!(!is_external("mailto:hello@example.com"));
        assert!(!is_external("/blogs"));
    }
}
