//! Diagnostic page showing the session from both layers (memory and
//! durable slot) and letting the identity be re-fetched from the backend.

use api::Identity;
use dioxus::prelude::*;
use store::SessionSlot as _;
use ui::{platform_slot, use_api, use_session};

fn describe(identity: &Identity) -> String {
    format!(
        "id: {:?}\nuserId: {:?}\nusername: {}\nemail: {}\nmoderator: {}\nbanned: {}",
        identity.id,
        identity.user_id,
        identity.username,
        identity.email.as_deref().unwrap_or("-"),
        identity.is_moderator,
        identity.banned,
    )
}

#[component]
pub fn UserLab() -> Element {
    let api = use_api();
    let mut session = use_session();

    let mut refreshed = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_refresh = move |_| {
        let api = api.clone();
        spawn(async move {
            let Some(user_id) = session.peek().current().and_then(|u| u.key()) else {
                error.set(Some(
                    "No user is currently logged in or user ID is missing".to_string(),
                ));
                return;
            };
            busy.set(true);
            error.set(None);
            match api.user_by_id(&user_id.to_string()).await {
                Ok(fresh) => {
                    // The session service is the slot's only writer, so
                    // the refreshed identity goes through it.
                    let mut updated = session.peek().clone();
                    let normalized = updated.refresh(fresh);
                    refreshed.set(Some(describe(&normalized)));
                    session.set(updated);
                }
                Err(e) => error.set(Some(format!("Error refreshing user: {e}"))),
            }
            busy.set(false);
        });
    };

    let in_memory = session
        .read()
        .current()
        .map(describe)
        .unwrap_or_else(|| "No user data".to_string());
    let stored = platform_slot()
        .load()
        .unwrap_or_else(|| "No user data".to_string());
    let authenticated = session.read().is_authenticated();

    rsx! {
        h1 { "Session Debug" }
        p {
            class: "muted",
            "Shows the authenticated identity as held in memory and in the "
            "durable slot, to diagnose login issues."
        }

        if let Some(err) = error() {
            div { class: "form-error", "{err}" }
        }

        p {
            strong { "Is Authenticated: " }
            if authenticated { "Yes" } else { "No" }
        }
        button {
            class: "primary",
            disabled: busy() || !authenticated,
            onclick: handle_refresh,
            if busy() { "Loading..." } else { "Refresh User Data" }
        }

        div {
            class: "lab-panels",
            div {
                h5 { "Current identity (memory)" }
                pre { class: "code-block", "{in_memory}" }
            }
            div {
                h5 { "Durable slot (raw)" }
                pre { class: "code-block", "{stored}" }
            }
            if let Some(fresh) = refreshed() {
                div {
                    h5 { "Refreshed from backend" }
                    pre { class: "code-block", "{fresh}" }
                }
            }
        }
    }
}
