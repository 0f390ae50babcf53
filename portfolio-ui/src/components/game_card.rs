//! Game card and the YouTube trailer embedded above it.

use dioxus::prelude::*;

use crate::content::Game;
use crate::theme::Theme;

#[component]
pub fn VideoEmbed(video_id: &'static str, title: &'static str) -> Element {
    rsx! {
        div {
            class: "video-frame",
            iframe {
                width: "100%",
                height: "100%",
                src: "https://www.youtube.com/embed/{video_id}",
                srcdoc: lite_embed_srcdoc(video_id, title),
                title: "{title}",
                allow: "accelerometer; autoplay; encrypted-media; gyroscope; picture-in-picture",
                allowfullscreen: true,
                style: "border: 0;",
            }
        }
    }
}

/// Lightweight stand-in document for the YouTube iframe: the video's
/// thumbnail and a play glyph linking to the autoplaying embed, so the
/// player's own script only loads on click.
fn lite_embed_srcdoc(video_id: &str, title: &str) -> String {
    format!(
        "<style>*{{padding:0;margin:0;overflow:hidden}}\
html,body{{height:100%}}\
img,span{{position:absolute;width:100%;top:0;bottom:0;margin:auto}}\
span{{height:1.5em;text-align:center;font:48px/1.5 sans-serif;color:white;text-shadow:0 0 0.5em black}}</style>\
<a href=https://www.youtube.com/embed/{video_id}?autoplay=1>\
<img src=https://img.youtube.com/vi/{video_id}/hqdefault.jpg alt='Video {title}'>\
<span>\u{25B6}</span></a>"
    )
}

#[component]
pub fn GameCard(theme: &'static Theme, game: &'static Game) -> Element {
    rsx! {
        div {
            class: "game-card",
            style: "background: {theme.game_card_bg}; color: {theme.font_primary};",

            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                img {
                    src: game.app_icon,
                    alt: "{game.title} icon",
                    width: "64",
                    height: "64",
                    style: "border-radius: 12px;",
                    loading: "lazy",
                }
                h3 {
                    style: "margin: 0; color: {theme.project_header};",
                    "{game.title}"
                }
            }

            div {
                style: "display: flex; gap: 0.75rem; margin: 0.75rem 0;",
                if let Some(url) = game.facebook_url {
                    SocialTextLink { theme, url, text: "Facebook" }
                }
                if let Some(url) = game.twitter_url {
                    SocialTextLink { theme, url, text: "Twitter" }
                }
                if let Some(url) = game.wiki_url {
                    SocialTextLink { theme, url, text: "Wiki" }
                }
                if let Some(url) = game.youtube_url {
                    SocialTextLink { theme, url, text: "YouTube" }
                }
            }

            for paragraph in game.description.split("\n\n") {
                p { style: "font-size: 0.95rem;", "{paragraph}" }
            }

            h4 { style: "margin-bottom: 0.25rem;", "Quick facts" }
            ul {
                for fact in game.facts {
                    li { "{fact}" }
                }
            }

            h4 { style: "margin-bottom: 0.25rem;", "Built with" }
            ul {
                for item in game.tech {
                    li { "{item}" }
                }
            }

            if !game.screenshots.is_empty() {
                div {
                    class: "game-screenshots",
                    for shot in game.screenshots {
                        img {
                            src: shot.url,
                            alt: shot.alt,
                            loading: "lazy",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SocialTextLink(theme: &'static Theme, url: &'static str, text: &'static str) -> Element {
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
