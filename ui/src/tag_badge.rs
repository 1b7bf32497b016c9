use dioxus::prelude::*;

/// A clickable tag chip linking to that tag's question listing.
#[component]
pub fn TagBadge(name: String) -> Element {
    rsx! {
        a {
            class: "tag-badge",
            href: "/tags/{name}",
            "{name}"
        }
    }
}
