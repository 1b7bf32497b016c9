//! Catch-all page for unknown routes.

use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "centered not-found",
            h1 { "404" }
            h4 { "Page not found" }
            p { class: "muted", "No page exists at /{path}" }
            a { class: "primary-link", href: "/", "Back to questions" }
        }
    }
}
