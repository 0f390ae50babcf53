//! Back-to-top affordance, shown once the page is scrolled.

use dioxus::prelude::*;

use crate::theme::Theme;

#[component]
pub fn ScrollToTopButton(theme: &'static Theme, visible: bool, on_click: Callback<()>) -> Element {
    rsx! {
        if visible {
            button {
                class: "scroll-top",
                style: "background: {theme.switcher_bg}; color: {theme.switcher_color};",
                title: "Back to top",
                onclick: move |_| on_click.call(()),
                "↑"
            }
        }
    }
}
