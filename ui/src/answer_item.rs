use api::{Answer, VoteType};
use dioxus::prelude::*;

use crate::format::{initial, short_date};
use crate::use_session;

/// One answer under a question: vote column, body, optional code block,
/// accept control, and the author byline.
///
/// Vote and accept are delegated upward; the page controller issues the
/// calls and re-fetches, so this component never mutates anything.
#[component]
pub fn AnswerItem(
    answer: Answer,
    is_accepted: bool,
    question_author_id: Option<i64>,
    question_has_accepted_answer: bool,
    on_vote: EventHandler<(i64, VoteType)>,
    on_accept: EventHandler<i64>,
) -> Element {
    let session = use_session();
    let viewer = session.read().current().and_then(|u| u.key());
    let authenticated = viewer.is_some();

    // Only the question's author may accept, and only while the question
    // has no accepted answer yet.
    let can_accept = question_author_id.is_some()
        && viewer == question_author_id
        && !question_has_accepted_answer;

    let answer_id = answer.id;
    let author = answer
        .author_username
        .clone()
        .unwrap_or_else(|| "User".to_string());
    let answered = answer
        .created_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "unknown date".to_string());

    rsx! {
        div {
            class: if is_accepted { "answer-item accepted-answer" } else { "answer-item" },

            if is_accepted {
                span { class: "accepted-marker", "Accepted Answer" }
            }

            div {
                class: "vote-buttons",
                button {
                    disabled: !authenticated,
                    onclick: move |_| {
                        if let Some(id) = answer_id {
                            on_vote.call((id, VoteType::Up));
                        }
                    },
                    "▲"
                }
                div { class: "vote-count", "{answer.net_votes()}" }
                button {
                    disabled: !authenticated,
                    onclick: move |_| {
                        if let Some(id) = answer_id {
                            on_vote.call((id, VoteType::Down));
                        }
                    },
                    "▼"
                }
            }

            div {
                class: "answer-body",
                p { "{answer.text}" }

                if let Some(code) = answer.image.as_deref().filter(|c| !c.is_empty()) {
                    pre { class: "code-block", code { "{code}" } }
                }

                div {
                    class: "answer-footer",
                    if can_accept && !is_accepted {
                        button {
                            class: "accept-button",
                            onclick: move |_| {
                                if let Some(id) = answer_id {
                                    on_accept.call(id);
                                }
                            },
                            "Accept Answer"
                        }
                    }

                    div {
                        class: "answer-byline",
                        span { class: "muted", "answered {answered} " }
                        span { class: "user-avatar", "{initial(&author)}" }
                        if let Some(author_id) = answer.author_id {
                            a { href: "/users/{author_id}", "{author}" }
                        } else {
                            span { "{author}" }
                        }
                    }
                }
            }
        }
    }
}
