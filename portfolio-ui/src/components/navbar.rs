//! Fixed top bar: brand, section links, burger, and the slide-out drawer.

use dioxus::prelude::*;

use crate::navigation::Section;
use crate::theme::{Theme, ThemeName};

#[component]
pub fn Navbar(
    theme: &'static Theme,
    open: bool,
    on_toggle: Callback<()>,
    on_close: Callback<()>,
    on_navigate: Callback<Section>,
    on_switch_theme: Callback<()>,
) -> Element {
    rsx! {
        nav {
            class: "top-nav",
            style: "background: {theme.gradient_header}; color: {theme.font_invert};",

            span { style: "font-weight: 600; font-size: 1.1rem;", "Stephen McVicker" }

            NavLinks { theme, open, on_navigate, on_switch_theme }
            Burger { theme, open, on_toggle }

            // Click-catcher behind the open drawer, mobile only.
            if open {
                button {
                    class: "nav-overlay",
                    aria_label: "Close navigation menu",
                    onclick: move |_| on_close.call(()),
                }
            }
        }
    }
}

#[component]
fn NavLinks(
    theme: &'static Theme,
    open: bool,
    on_navigate: Callback<Section>,
    on_switch_theme: Callback<()>,
) -> Element {
    let switch_icon = if theme.name == ThemeName::Dark {
        "☀️"
    } else {
        "🌙"
    };

    rsx! {
        ul {
            class: if open { "nav-links open" } else { "nav-links" },
            style: "--drawer-bg: {theme.card_bg}; --nav-link-color: {theme.font_invert}; --drawer-link-color: {theme.font_primary};",

            for section in Section::ALL {
                li {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_navigate.call(section),
                        {section.label()}
                    }
                }
            }

            li {
                button {
                    class: "theme-switch",
                    style: "background: {theme.switcher_bg}; color: {theme.switcher_color};",
                    title: "Toggle theme",
                    onclick: move |_| on_switch_theme.call(()),
                    "{switch_icon}"
                }
            }
        }
    }
}

#[component]
fn Burger(theme: &'static Theme, open: bool, on_toggle: Callback<()>) -> Element {
    // Over the open drawer the bars sit on the card background, not the
    // header gradient.
    let bar_color = if open {
        theme.font_primary
    } else {
        theme.font_invert
    };

    rsx! {
        button {
            class: if open { "burger open" } else { "burger" },
            aria_label: "Toggle navigation menu",
            onclick: move |_| on_toggle.call(()),

            div { class: "burger-bar", style: "background-color: {bar_color};" }
            div { class: "burger-bar", style: "background-color: {bar_color};" }
            div { class: "burger-bar", style: "background-color: {bar_color};" }
        }
    }
}
