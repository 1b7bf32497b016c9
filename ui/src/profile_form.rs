//! Inline profile editor shown on the user's own profile page.

use api::Identity;
use dioxus::prelude::*;

/// Edit form for the profile fields a user may change themselves.
/// Submitting hands the caller a full replacement [`Identity`] (the
/// backend's update endpoint is full-replace, so untouched fields are
/// carried over from the original).
#[component]
pub fn ProfileForm(
    user: Identity,
    on_save: EventHandler<Identity>,
    on_cancel: EventHandler<()>,
) -> Element {
    let original = user.clone();
    let mut email = use_signal(|| user.email.clone().unwrap_or_default());
    let mut phone_number = use_signal(|| user.phone_number.clone().unwrap_or_default());
    let mut bio = use_signal(|| user.bio.clone().unwrap_or_default());
    let mut location = use_signal(|| user.location.clone().unwrap_or_default());
    let mut website = use_signal(|| user.website.clone().unwrap_or_default());
    let mut github = use_signal(|| user.github.clone().unwrap_or_default());
    let mut linkedin = use_signal(|| user.linkedin.clone().unwrap_or_default());
    let mut twitter = use_signal(|| user.twitter.clone().unwrap_or_default());
    let mut error = use_signal(|| Option::<String>::None);

    let none_if_blank = |value: String| {
        let trimmed = value.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let email_value = email().trim().to_string();
        if email_value.is_empty() || !email_value.contains('@') {
            error.set(Some("Please enter a valid email".to_string()));
            return;
        }

        let updated = Identity {
            email: Some(email_value),
            phone_number: none_if_blank(phone_number()),
            bio: none_if_blank(bio()),
            location: none_if_blank(location()),
            website: none_if_blank(website()),
            github: none_if_blank(github()),
            linkedin: none_if_blank(linkedin()),
            twitter: none_if_blank(twitter()),
            ..original.clone()
        };
        on_save.call(updated);
    };

    rsx! {
        form {
            class: "profile-form",
            onsubmit: handle_submit,
            h5 { "Edit Profile" }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Phone" }
                input {
                    r#type: "tel",
                    value: phone_number(),
                    oninput: move |evt| phone_number.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "About" }
                textarea {
                    rows: 4,
                    value: bio(),
                    oninput: move |evt| bio.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Location" }
                input {
                    value: location(),
                    oninput: move |evt| location.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Website" }
                input {
                    r#type: "url",
                    value: website(),
                    oninput: move |evt| website.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "GitHub username" }
                input {
                    value: github(),
                    oninput: move |evt| github.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "LinkedIn username" }
                input {
                    value: linkedin(),
                    oninput: move |evt| linkedin.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Twitter username" }
                input {
                    value: twitter(),
                    oninput: move |evt| twitter.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button { class: "primary", r#type: "submit", "Save Changes" }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
