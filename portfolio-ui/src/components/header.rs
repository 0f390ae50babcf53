//! Hero section at the top of the page.

use dioxus::prelude::*;

use crate::navigation::Section;
use crate::theme::Theme;

#[component]
pub fn HeaderSection(
    theme: &'static Theme,
    on_anchor: Callback<Section>,
    on_navigate: Callback<Section>,
) -> Element {
    let id = Section::Home.id();

    rsx! {
        header {
            id: id,
            class: "hero",
            style: "background: {theme.gradient_header}; color: {theme.font_invert};",
            onmounted: move |_| on_anchor.call(Section::Home),

            h1 { "Stephen McVicker" }
            p { "Frontend engineer and indie game developer, based in Dublin, Ireland." }
            button {
                class: "hero-cta",
                style: "background: {theme.switcher_bg}; color: {theme.switcher_color};",
                onclick: move |_| on_navigate.call(Section::WebProjects),
                "See my work"
            }
        }
    }
}
