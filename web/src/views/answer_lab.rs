//! Diagnostic page for exercising the answer endpoints by hand: fill in
//! raw ids, fire either creation endpoint, and inspect the outcome.

use dioxus::prelude::*;
use ui::{use_api, use_session};

#[component]
pub fn AnswerLab() -> Element {
    let api = use_api();
    let session = use_session();

    let mut question_id = use_signal(String::new);
    let mut author_id = use_signal(String::new);
    let mut text = use_signal(|| "Test answer".to_string());
    let mut code = use_signal(String::new);
    let mut output = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    // Prefill the author field from the session for convenience.
    use_effect(move || {
        if author_id.peek().is_empty() {
            if let Some(id) = session.peek().current().and_then(|u| u.key()) {
                author_id.set(id.to_string());
            }
        }
    });

    let direct_api = api.clone();
    let handle_direct_create = move |_| {
        let api = direct_api.clone();
        spawn(async move {
            busy.set(true);
            let result = api
                .create_answer(&author_id(), &question_id(), &text(), &code())
                .await;
            output.set(Some(match result {
                Ok(answer) => format!("direct-create ok: {answer:?}"),
                Err(e) => format!("direct-create failed: {e}"),
            }));
            busy.set(false);
        });
    };

    let debug_api = api.clone();
    let handle_debug_create = move |_| {
        let api = debug_api.clone();
        spawn(async move {
            busy.set(true);
            let result = api
                .debug_answer(&author_id(), &question_id(), &text(), &code())
                .await;
            output.set(Some(match result {
                Ok(answer) => format!("debug ok: {answer:?}"),
                Err(e) => format!("debug failed: {e}"),
            }));
            busy.set(false);
        });
    };

    let list_api = api.clone();
    let handle_list = move |_| {
        let api = list_api.clone();
        spawn(async move {
            busy.set(true);
            let result = api.answers_by_question(&question_id()).await;
            output.set(Some(match result {
                Ok(list) => format!("{} answers: {list:#?}", list.len()),
                Err(e) => format!("listing failed: {e}"),
            }));
            busy.set(false);
        });
    };

    rsx! {
        h1 { "Answer API Lab" }
        p {
            class: "muted",
            "Manual testing surface for the answer endpoints. Inputs are sent "
            "as-is so invalid ids exercise the gateway's validation."
        }

        div {
            class: "form-field",
            label { "Question ID" }
            input {
                value: question_id(),
                oninput: move |evt| question_id.set(evt.value()),
            }
        }
        div {
            class: "form-field",
            label { "Author ID" }
            input {
                value: author_id(),
                oninput: move |evt| author_id.set(evt.value()),
            }
        }
        div {
            class: "form-field",
            label { "Text" }
            textarea {
                rows: 3,
                value: text(),
                oninput: move |evt| text.set(evt.value()),
            }
        }
        div {
            class: "form-field",
            label { "Code" }
            textarea {
                class: "monospace",
                rows: 3,
                value: code(),
                oninput: move |evt| code.set(evt.value()),
            }
        }

        div {
            class: "form-actions",
            button {
                class: "primary",
                disabled: busy(),
                onclick: handle_direct_create,
                "POST /answers/direct-create"
            }
            button {
                class: "secondary",
                disabled: busy(),
                onclick: handle_debug_create,
                "POST /answers/debug"
            }
            button {
                class: "secondary",
                disabled: busy(),
                onclick: handle_list,
                "GET /answers/question/:id"
            }
        }

        if let Some(out) = output() {
            pre { class: "code-block", "{out}" }
        }
    }
}
