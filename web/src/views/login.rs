//! Login page: username/password form over the session service.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already logged in: nothing to do here.
    if session.read().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            let user = username().trim().to_string();
            let pass = password();
            if user.is_empty() || pass.trim().is_empty() {
                error.set(Some("Username and password are required".to_string()));
                return;
            }

            loading.set(true);
            error.set(None);

            // Run the flow on a detached copy; only a successful login is
            // written back into the shared session.
            let mut attempt = session.peek().clone();
            match attempt.login(&api, &user, &pass).await {
                Ok(_) => {
                    session.set(attempt);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "form-container",
            h1 { "Log in to StackUnderflow" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            form {
                onsubmit: handle_submit,
                div {
                    class: "form-field",
                    label { "Username" }
                    input {
                        r#type: "text",
                        placeholder: "Enter your username",
                        value: username(),
                        disabled: loading(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        disabled: loading(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Logging in..." } else { "Log in" }
                }
            }

            p {
                class: "centered",
                "Don't have an account? "
                a { href: "/register", "Sign up" }
            }
        }
    }
}
