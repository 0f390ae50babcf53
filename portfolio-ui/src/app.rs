//! Root coordinator: owns the theme and navigation controllers and wires
//! them to the rendering components as plain props and callbacks.

use dioxus::prelude::*;

use crate::components::about::AboutSection;
use crate::components::contact::ContactMe;
use crate::components::game_card::{GameCard, VideoEmbed};
use crate::components::header::HeaderSection;
use crate::components::navbar::Navbar;
use crate::components::project_card::ProjectCard;
use crate::components::scroll_top::ScrollToTopButton;
use crate::components::sections::{SectionContent, SectionHeader};
use crate::content::{GAMES, GITHUB_PROFILE_URL, WEB_PROJECTS};
use crate::interop::{on_window_scroll, BrowserStore, DomAnchor};
use crate::navigation::{NavController, Section};
use crate::styles::GLOBAL_STYLES;
use crate::theme::ThemeController;

/// Scroll offset (CSS px) past which the back-to-top button appears.
const SCROLL_TOP_THRESHOLD: f64 = 400.0;

#[component]
pub fn App() -> Element {
    // Both controllers are constructed exactly once; the signal keeps their
    // identity stable across re-renders so registered anchors stay valid.
    let mut theme_ctl = use_signal(|| ThemeController::new(BrowserStore));
    let mut nav = use_signal(NavController::<DomAnchor>::new);

    let mut show_scroll_top = use_signal(|| false);
    let mut scroll_listener_attached = use_signal(|| false);

    let track_scroll = use_callback(move |y: f64| {
        let visible = y > SCROLL_TOP_THRESHOLD;
        if *show_scroll_top.peek() != visible {
            show_scroll_top.set(visible);
        }
    });

    use_effect(move || {
        if scroll_listener_attached() {
            return;
        }
        scroll_listener_attached.set(true);
        on_window_scroll(track_scroll);
    });

    let switch_theme = use_callback(move |_: ()| theme_ctl.write().toggle());
    let toggle_menu = use_callback(move |_: ()| nav.write().toggle());
    let close_menu = use_callback(move |_: ()| nav.write().close());
    let navigate = use_callback(move |section: Section| nav.write().scroll_to(section));
    let register_anchor = use_callback(move |section: Section| {
        nav.write().register(section, DomAnchor::new(section.id()));
    });
    let scroll_home = use_callback(move |_: ()| nav.write().scroll_to(Section::Home));

    let theme = theme_ctl.read().current();
    let menu_open = nav.read().is_open();
    let contact_id = Section::Contact.id();

    rsx! {
        style { {GLOBAL_STYLES} }

        div {
            style: "min-height: 100vh; background: {theme.bg_main}; color: {theme.font_primary};",

            Navbar {
                theme,
                open: menu_open,
                on_toggle: toggle_menu,
                on_close: close_menu,
                on_navigate: navigate,
                on_switch_theme: switch_theme,
            }

            HeaderSection { theme, on_anchor: register_anchor, on_navigate: navigate }

            SectionHeader {
                section: Section::About,
                title: "About Me",
                background: theme.bg_accent,
                color: theme.project_header,
                on_anchor: register_anchor,
            }
            SectionContent {
                background: theme.bg_main,
                color: theme.font_primary,
                padding: "2rem 1rem",
                AboutSection { theme }
            }

            SectionHeader {
                section: Section::WebProjects,
                title: "Web Projects",
                background: theme.bg_accent,
                color: theme.project_header,
                on_anchor: register_anchor,
            }
            SectionContent {
                background: theme.bg_accent,
                color: theme.font_primary,
                padding: "2rem 0 5rem 0",

                div {
                    class: "project-row",
                    for project in WEB_PROJECTS.iter() {
                        ProjectCard { theme, project }
                    }
                }
                div {
                    style: "text-align: center; margin-top: 1.5rem;",
                    a {
                        href: GITHUB_PROFILE_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: {theme.link_color};",
                        "Check Out My Github For More"
                    }
                }
            }

            SectionHeader {
                section: Section::Games,
                title: "Games",
                background: theme.base.blue_dark,
                color: theme.bg_accent,
                on_anchor: register_anchor,
            }
            SectionContent {
                background: theme.bg_main,
                color: theme.font_primary,
                padding: "2rem 1rem",

                div {
                    style: "display: flex; flex-direction: column; align-items: center; width: 100%;",
                    for game in GAMES.iter() {
                        VideoEmbed { video_id: game.trailer_id, title: game.trailer_title }
                        GameCard { theme, game }
                    }
                }
            }

            section {
                id: contact_id,
                style: "background: {theme.gradient1}; color: {theme.font_invert}; padding: 2rem 1rem 1rem 1rem; text-align: center;",
                onmounted: move |_| register_anchor.call(Section::Contact),

                h2 { "Contact Me" }
                ContactMe { theme }
            }

            SectionContent {
                background: theme.gradient2,
                color: theme.font_invert,
                padding: "1rem",

                p {
                    style: "text-align: center;",
                    "Handcrafted by me, Stephen McVicker."
                    br {}
                    "Original design in Figma."
                    br {}
                    "Created with Rust, Dioxus, and love ❤️. View source on "
                    a {
                        href: "https://github.com/stephenmcvicker/portfolio",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: {theme.link_color};",
                        "Github"
                    }
                    "."
                }
            }

            ScrollToTopButton { theme, visible: show_scroll_top(), on_click: scroll_home }
        }
    }
}
