//! Registration page: create an account and log straight into it.

use api::NewUser;
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut phone_number = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    if session.read().is_authenticated() {
        nav.replace(Route::Home {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let name = username().trim().to_string();
            let mail = email().trim().to_string();
            let pass = password();

            if name.is_empty() {
                error.set(Some("Username is required".to_string()));
                return;
            }
            if mail.is_empty() || !mail.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if pass.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }
            if pass != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let new_user = NewUser {
                username: name,
                email: mail,
                password: pass,
                phone_number: phone_number().trim().to_string(),
            };
            let mut attempt = session.peek().clone();
            match attempt.register(&api, &new_user).await {
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
            h1 { "Create your account" }

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
                        value: username(),
                        disabled: loading(),
                        oninput: move |evt| username.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: email(),
                        disabled: loading(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: password(),
                        disabled: loading(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Confirm password" }
                    input {
                        r#type: "password",
                        value: confirm_password(),
                        disabled: loading(),
                        oninput: move |evt| confirm_password.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    label { "Phone number (optional)" }
                    input {
                        r#type: "tel",
                        value: phone_number(),
                        disabled: loading(),
                        oninput: move |evt| phone_number.set(evt.value()),
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "centered",
                "Already have an account? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
