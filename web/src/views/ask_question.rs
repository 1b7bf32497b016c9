//! Ask-question page: title/body/tags/image form with client-side
//! validation, then navigate to the created question.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn AskQuestion() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut tags = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            error.set(None);

            let title_value = title().trim().to_string();
            let text_value = text().trim().to_string();
            if title_value.is_empty() {
                error.set(Some("Please provide a title for your question".to_string()));
                return;
            }
            if text_value.is_empty() {
                error.set(Some("Please provide details for your question".to_string()));
                return;
            }
            if title_value.len() < 15 {
                error.set(Some(
                    "Title should be at least 15 characters long".to_string(),
                ));
                return;
            }
            let Some(author_id) = session.peek().current().and_then(|u| u.key()) else {
                error.set(Some(
                    "User session is invalid. Please log in again.".to_string(),
                ));
                return;
            };

            loading.set(true);
            let created = api
                .create_question(author_id, &title_value, &text_value, &image_url(), &tags())
                .await;
            match created {
                Ok(question) => match question.key() {
                    Some(id) => {
                        nav.replace(Route::QuestionDetail { id: id.to_string() });
                    }
                    None => {
                        // Created but the response carried no id; the home
                        // listing will show it.
                        nav.replace(Route::Home {});
                    }
                },
                Err(e) => {
                    tracing::error!("posting question failed: {e}");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        h1 { "Ask a Question" }

        if let Some(err) = error() {
            div { class: "form-error", "{err}" }
        }

        form {
            onsubmit: handle_submit,
            div {
                class: "form-field",
                label { "Title" }
                input {
                    r#type: "text",
                    placeholder: "e.g. How do I share state between two components?",
                    value: title(),
                    disabled: loading(),
                    oninput: move |evt| title.set(evt.value()),
                }
                span {
                    class: "muted",
                    "Be specific and imagine you're asking a question to another person."
                }
            }

            div {
                class: "form-field",
                label { "Body" }
                textarea {
                    rows: 10,
                    placeholder: "Include all the information someone would need to answer your question",
                    value: text(),
                    disabled: loading(),
                    oninput: move |evt| text.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { "Tags" }
                input {
                    r#type: "text",
                    placeholder: "e.g. java,spring,hibernate",
                    value: tags(),
                    disabled: loading(),
                    oninput: move |evt| tags.set(evt.value()),
                }
                span {
                    class: "muted",
                    "Add up to 5 tags, separated with commas."
                }
            }

            div {
                class: "form-field",
                label { "Image URL (Optional)" }
                input {
                    r#type: "url",
                    placeholder: "e.g. https://example.com/image.png",
                    value: image_url(),
                    disabled: loading(),
                    oninput: move |evt| image_url.set(evt.value()),
                }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: loading(),
                if loading() { "Posting..." } else { "Post Your Question" }
            }
        }
    }
}
