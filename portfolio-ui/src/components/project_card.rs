//! Card for a single web project.

use dioxus::prelude::*;

use crate::content::{Project, Tag};
use crate::theme::Theme;

#[component]
pub fn ProjectCard(theme: &'static Theme, project: &'static Project) -> Element {
    rsx! {
        div {
            class: "project-card",
            style: "background: {theme.card_bg}; color: {theme.font_primary};",

            img {
                src: project.image_url,
                alt: project.title,
                loading: "lazy",
            }

            div {
                style: "padding: 1rem;",

                h3 {
                    style: "margin: 0 0 0.5rem 0; color: {theme.project_header};",
                    "{project.title}"
                }
                p {
                    style: "font-size: 0.9rem; margin: 0 0 0.75rem 0;",
                    "{project.description}"
                }

                div {
                    for tag in project.tags {
                        TagChip { theme, tag: *tag }
                    }
                }

                div {
                    style: "display: flex; gap: 1rem; margin-top: 0.75rem;",
                    if let Some(url) = project.demo_url {
                        CardLink { theme, url, text: "Demo" }
                    }
                    if let Some(url) = project.github_url {
                        CardLink { theme, url, text: "GitHub" }
                    }
                    if let Some(url) = project.youtube_url {
                        CardLink { theme, url, text: "Video" }
                    }
                }
            }
        }
    }
}

#[component]
fn TagChip(theme: &'static Theme, tag: Tag) -> Element {
    let chip_bg = tag.color.unwrap_or(theme.base.blue_dark);

    rsx! {
        span {
            class: "tag-chip",
            style: "background: {chip_bg};",
            "{tag.label}"
        }
    }
}

#[component]
fn CardLink(theme: &'static Theme, url: &'static str, text: &'static str) -> Element {
    rsx! {
        a {
            href: url,
            target: "_blank",
            rel: "noopener noreferrer",
            style: "color: {theme.link_color}; font-size: 0.9rem;",
            "{text}"
        }
    }
}
