//! Question detail page: the question, its answers, voting, accepting,
//! and the answer form.
//!
//! Consistency model is re-fetch after write: every mutation re-reads the
//! entity it affected instead of patching local state. Votes re-fetch
//! only the voted entity; accepting re-fetches both the question and the
//! answer list.

use api::{Answer, ApiClient, Question, VoteType};
use dioxus::prelude::*;
use ui::format::short_date;
use ui::{use_api, use_session, AnswerItem, TagBadge};

use crate::Route;

async fn load_question(
    api: ApiClient,
    id: String,
    mut question: Signal<Option<Question>>,
    mut error: Signal<Option<String>>,
) {
    match api.question_by_id(&id).await {
        Ok(loaded) => {
            question.set(Some(loaded));
            error.set(None);
        }
        Err(e) => {
            tracing::error!("loading question {id} failed: {e}");
            error.set(Some(e.to_string()));
        }
    }
}

async fn load_answers(
    api: ApiClient,
    question: Signal<Option<Question>>,
    route_id: String,
    mut answers: Signal<Vec<Answer>>,
) {
    // Prefer the id from the loaded question; fall back to the route
    // parameter so answers still load if the question fetch failed.
    let question_id = question
        .peek()
        .as_ref()
        .and_then(Question::key)
        .map(|id| id.to_string())
        .unwrap_or(route_id);

    match api.answers_by_question(&question_id).await {
        Ok(list) => answers.set(list),
        // The question still renders without its answers.
        Err(e) => tracing::warn!("loading answers for {question_id} failed: {e}"),
    }
}

#[component]
pub fn QuestionDetail(id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();

    let mut question = use_signal(|| Option::<Question>::None);
    let answers = use_signal(Vec::<Answer>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut answer_text = use_signal(String::new);
    let mut answer_code = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut answer_error = use_signal(|| Option::<String>::None);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let loader_api = api.clone();
    let _loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let id = id_signal();
            loading.set(true);
            load_question(api.clone(), id.clone(), question, error).await;
            load_answers(api, question, id, answers).await;
            loading.set(false);
        }
    });

    let vote_api = api.clone();
    let handle_question_vote = use_callback(move |vote_type: VoteType| {
        let Some(user_id) = session.peek().current().and_then(|u| u.key()) else {
            nav.push(Route::Login {});
            return;
        };
        let Some(question_id) = question.peek().as_ref().and_then(Question::key) else {
            return;
        };
        let api = vote_api.clone();
        spawn(async move {
            match api.vote_question(user_id, question_id, vote_type).await {
                // Scoped re-fetch: the vote changed the question only.
                Ok(()) => {
                    load_question(api, question_id.to_string(), question, error).await;
                }
                Err(e) => {
                    tracing::error!("question vote failed: {e}");
                    error.set(Some(format!("Vote failed: {e}")));
                }
            }
        });
    });

    let answer_vote_api = api.clone();
    let handle_answer_vote = use_callback(move |(answer_id, vote_type): (i64, VoteType)| {
        let Some(user_id) = session.peek().current().and_then(|u| u.key()) else {
            nav.push(Route::Login {});
            return;
        };
        let api = answer_vote_api.clone();
        spawn(async move {
            match api.vote_answer(user_id, answer_id, vote_type).await {
                // Scoped re-fetch: only the answer list changed.
                Ok(()) => {
                    load_answers(api, question, id_signal(), answers).await;
                }
                Err(e) => {
                    tracing::error!("answer vote failed: {e}");
                    answer_error.set(Some(format!("Vote failed: {e}")));
                }
            }
        });
    });

    let accept_api = api.clone();
    let handle_accept = use_callback(move |answer_id: i64| {
        let Some(question_id) = question.peek().as_ref().and_then(Question::key) else {
            return;
        };
        let api = accept_api.clone();
        spawn(async move {
            match api.accept_answer(question_id, answer_id).await {
                Ok(()) => {
                    load_question(api.clone(), question_id.to_string(), question, error).await;
                    load_answers(api, question, id_signal(), answers).await;
                }
                Err(e) => {
                    tracing::error!("accepting answer failed: {e}");
                    error.set(Some(format!("Failed to accept answer: {e}")));
                }
            }
        });
    });

    let submit_api = api.clone();
    let handle_submit_answer = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(user_id) = session.peek().current().and_then(|u| u.key()) else {
            nav.push(Route::Login {});
            return;
        };
        let text = answer_text();
        if text.trim().is_empty() {
            answer_error.set(Some("Answer text is required".to_string()));
            return;
        }
        let Some(question_id) = question.peek().as_ref().and_then(Question::key) else {
            answer_error.set(Some(
                "Cannot submit answer due to missing question ID".to_string(),
            ));
            return;
        };

        let api = submit_api.clone();
        spawn(async move {
            submitting.set(true);
            answer_error.set(None);
            let result = api
                .create_answer(
                    &user_id.to_string(),
                    &question_id.to_string(),
                    &text,
                    &answer_code(),
                )
                .await;
            match result {
                Ok(_) => {
                    answer_text.set(String::new());
                    answer_code.set(String::new());
                    load_answers(api, question, id_signal(), answers).await;
                }
                Err(e) => {
                    answer_error.set(Some(format!("Failed to submit your answer: {e}")));
                }
            }
            submitting.set(false);
        });
    };

    let authenticated = session.read().is_authenticated();

    if loading() {
        return rsx! {
            p { class: "muted centered", "Loading..." }
        };
    }

    let Some(current) = question() else {
        let message = error().unwrap_or_else(|| "Question not found".to_string());
        return rsx! {
            div { class: "form-error", "{message}" }
            div {
                class: "centered",
                a { class: "primary-link", href: "/", "Return to Questions" }
            }
        };
    };

    let tags = current.tag_names();
    let author = current.author_display().to_string();
    let asked = current
        .created_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "unknown date".to_string());
    let answer_list = answers();
    let answer_count = answer_list.len();
    let accepted_id = current.accepted_answer_id;

    rsx! {
        a { href: "/", "← Back to All Questions" }

        if let Some(err) = error() {
            div { class: "form-error", "{err}" }
        }

        div {
            class: "question-detail",
            div {
                class: "vote-buttons",
                button {
                    disabled: !authenticated,
                    onclick: move |_| handle_question_vote.call(VoteType::Up),
                    "▲"
                }
                div { class: "vote-count", "{current.votes}" }
                button {
                    disabled: !authenticated,
                    onclick: move |_| handle_question_vote.call(VoteType::Down),
                    "▼"
                }
            }

            div {
                class: "question-detail-body",
                h2 { "{current.title}" }
                p { "{current.text}" }

                if let Some(image) = current.image.as_deref().filter(|i| !i.is_empty()) {
                    img { class: "question-image", src: "{image}" }
                }

                div {
                    for tag in tags {
                        TagBadge { name: tag }
                    }
                }

                div {
                    class: "question-card-byline",
                    span { class: "muted", "asked {asked} " }
                    if let Some(author_id) = current.author_id {
                        a { href: "/users/{author_id}", "{author}" }
                    } else {
                        span { "{author}" }
                    }
                }
            }
        }

        h4 {
            if answer_count == 1 { "1 Answer" } else { "{answer_count} Answers" }
        }

        if let Some(err) = answer_error() {
            div { class: "form-error", "{err}" }
        }

        for answer in answer_list {
            AnswerItem {
                key: "{answer.id.unwrap_or_default()}",
                is_accepted: accepted_id.is_some() && accepted_id == answer.id,
                question_author_id: current.author_id,
                question_has_accepted_answer: accepted_id.is_some(),
                answer,
                on_vote: handle_answer_vote,
                on_accept: handle_accept,
            }
        }

        div {
            class: "answer-form",
            h4 { "Your Answer" }

            if !authenticated {
                div {
                    class: "centered",
                    p { "You must be logged in to answer questions." }
                    a { class: "primary-link", href: "/login", "Log in" }
                    span { " or " }
                    a { href: "/register", "Sign up" }
                }
            } else {
                form {
                    onsubmit: handle_submit_answer,
                    div {
                        class: "form-field",
                        label { "Answer Text" }
                        textarea {
                            rows: 6,
                            placeholder: "Write your answer here...",
                            value: answer_text(),
                            disabled: submitting(),
                            oninput: move |evt| answer_text.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Code (Optional)" }
                        textarea {
                            class: "monospace",
                            rows: 4,
                            placeholder: "Add code if relevant to your answer...",
                            value: answer_code(),
                            disabled: submitting(),
                            oninput: move |evt| answer_code.set(evt.value()),
                        }
                    }
                    button {
                        class: "primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Submitting..." } else { "Post Your Answer" }
                    }
                }
            }
        }
    }
}
