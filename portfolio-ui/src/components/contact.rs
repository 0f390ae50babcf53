//! Contact block: a short line of copy and the social icon row.

use dioxus::prelude::*;

use crate::content::CONTACT_LINKS;
use crate::theme::Theme;

#[component]
pub fn ContactMe(theme: &'static Theme) -> Element {
    rsx! {
        p {
            style: "max-width: 32rem; margin: 0 auto;",
            "Want to work together, or just say hi? Reach me through any of these."
        }
        div {
            class: "contact-row",
            for link in CONTACT_LINKS {
                a {
                    class: "social-icon",
                    style: "background: {theme.social_icon_bg}; color: {theme.social_icon_color};",
                    href: link.url,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{link.label}",
                    "{link.icon}"
                }
            }
        }
    }
}
