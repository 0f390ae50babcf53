//! Browser bindings: localStorage, DOM scroll targets, window listeners.

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::navigation::SectionAnchor;
use crate::theme::PreferenceStore;

/// Preference storage over `window.localStorage`, best effort. A browser
/// that denies storage degrades to in-memory-only switching for the session.
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match self.storage() {
            Some(storage) => {
                let _ = storage.set_item(key, value);
            }
            None => {
                dioxus_logger::tracing::warn!("localStorage unavailable, preference not persisted");
            }
        }
    }
}

/// Scroll target resolved by element id at scroll time, so mount order
/// never matters.
#[derive(Clone)]
pub struct DomAnchor {
    id: &'static str,
}

impl DomAnchor {
    pub fn new(id: &'static str) -> Self {
        Self { id }
    }
}

impl SectionAnchor for DomAnchor {
    fn scroll_into_view(&self) {
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(self.id) else {
            log::debug!("no element with id '{}' to scroll to", self.id);
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Attach a window scroll listener. Calls `on_scroll` with the vertical
/// offset on each scroll event.
pub fn on_window_scroll(on_scroll: Callback<f64>) {
    let Some(win) = window() else {
        return;
    };

    let win_for_closure = win.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let y = win_for_closure.scroll_y().unwrap_or(0.0);
        on_scroll.call(y);
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

    // Leak the closure to keep it alive for the page lifetime.
    closure.forget();
}
