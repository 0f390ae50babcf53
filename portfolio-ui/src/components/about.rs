//! About-me copy and the skill logo strip.

use dioxus::prelude::*;

use crate::content::{
    ABOUT_CALIS_PROJECTS, ABOUT_CRAFT, ABOUT_FRONTEND_INTRO, ABOUT_FRONTEND_STACK, ABOUT_INTRO,
    ABOUT_LOCATION, BONKERS_LOGO_URL, BONKERS_URL, CALIS_LOGO_URL, SKILLS,
};
use crate::theme::Theme;

#[component]
pub fn AboutSection(theme: &'static Theme) -> Element {
    rsx! {
        div {
            class: "about-layout",
            div {
                class: "about-column",

                p {
                    style: "font-size: 1.1rem; margin: 1.5rem 0;",
                    "{ABOUT_INTRO}"
                    br {}
                    span { "{ABOUT_LOCATION}" }
                }

                div {
                    style: "font-size: 1.1rem; padding: 1.5rem 0; text-align: left;",

                    img {
                        src: CALIS_LOGO_URL,
                        alt: "Calis Projects Logo",
                        width: "300",
                        loading: "lazy",
                    }
                    h3 { style: "color: {theme.project_header};", "Calis Projects" }
                    p { style: "padding: 0.5rem 0 1.5rem 0;", "{ABOUT_CALIS_PROJECTS}" }

                    img {
                        src: BONKERS_LOGO_URL,
                        alt: "bonkers logo",
                        width: "200",
                        style: "background-color: #56c55d; border-radius: 4px; padding: 1rem;",
                        loading: "lazy",
                    }
                    h3 { style: "color: {theme.project_header};", "Switch to Frontend" }
                    p {
                        style: "padding: 0.5rem 0 1.5rem 0;",
                        "{ABOUT_FRONTEND_INTRO}"
                        a {
                            href: BONKERS_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            style: "color: {theme.link_color};",
                            "bonkers.ie"
                        }
                        "."
                        br {}
                        "{ABOUT_FRONTEND_STACK}"
                    }

                    p { style: "padding: 0 0 1.5rem 0;", "{ABOUT_CRAFT}" }

                    p { "Coded in Rust with Dioxus, and love ❤️." }
                }

                div {
                    class: "skill-row",
                    for skill in SKILLS {
                        img {
                            class: "skill-logo",
                            src: skill.image_url,
                            alt: skill.alt,
                            title: skill.blurb,
                            height: "80",
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}
