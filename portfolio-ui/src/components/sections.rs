//! Section banner and content wrappers shared by every page section.

use dioxus::prelude::*;

use crate::navigation::Section;

/// Full-width banner that doubles as the section's scroll anchor.
#[component]
pub fn SectionHeader(
    section: Section,
    title: &'static str,
    background: &'static str,
    color: &'static str,
    on_anchor: Callback<Section>,
) -> Element {
    let id = section.id();

    rsx! {
        div {
            id: id,
            class: "section-header",
            style: "background: {background}; color: {color};",
            onmounted: move |_| on_anchor.call(section),
            h2 { "{title}" }
        }
    }
}

/// Plain content band: background, text color, padding, children.
#[component]
pub fn SectionContent(
    background: &'static str,
    color: &'static str,
    #[props(default = "2rem 1rem")] padding: &'static str,
    children: Element,
) -> Element {
    rsx! {
        section {
            style: "background: {background}; color: {color}; padding: {padding};",
            {children}
        }
    }
}
