//! Top navigation bar: brand, search box, and the auth-dependent corner.

use dioxus::prelude::*;

use crate::format::initial;
use crate::use_session;

/// Application navbar. Search submission is delegated to the caller so
/// the routable crate decides where results live.
#[component]
pub fn Navbar(on_search: EventHandler<String>) -> Element {
    let mut session = use_session();
    let mut query = use_signal(String::new);

    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        let keyword = query().trim().to_string();
        if keyword.is_empty() {
            return;
        }
        query.set(String::new());
        on_search.call(keyword);
    };

    let handle_logout = move |_| {
        session.write().logout();
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    let current = session.read().current().cloned();
    let profile_href = current
        .as_ref()
        .and_then(|u| u.key())
        .map(|id| format!("/users/{id}"))
        .unwrap_or_else(|| "/".to_string());

    rsx! {
        nav {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "StackUnderflow" }

            form {
                class: "navbar-search",
                onsubmit: handle_search,
                input {
                    r#type: "search",
                    placeholder: "Search questions, users...",
                    value: query(),
                    oninput: move |evt| query.set(evt.value()),
                }
                button { r#type: "submit", "Search" }
            }

            div {
                class: "navbar-links",
                a { href: "/", "Home" }
                a { href: "/tags", "Tags" }

                if let Some(user) = current {
                    a { class: "navbar-ask", href: "/ask", "Ask Question" }
                    a {
                        class: "navbar-user",
                        href: "{profile_href}",
                        span { class: "user-avatar", "{initial(&user.username)}" }
                        span { "{user.username}" }
                    }
                    button {
                        class: "navbar-logout",
                        onclick: handle_logout,
                        "Logout"
                    }
                } else {
                    a { class: "navbar-login", href: "/login", "Log in" }
                    a { class: "navbar-signup", href: "/register", "Sign up" }
                }
            }
        }
    }
}
