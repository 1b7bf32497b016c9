use api::Question;
use dioxus::prelude::*;

use crate::format::{short_date, truncate};
use crate::TagBadge;

/// Summary card for a question in any listing (home, tag, search,
/// profile). Links go through plain hrefs; the card renders nothing
/// clickable for a question the backend sent without an id.
#[component]
pub fn QuestionCard(question: Question) -> Element {
    let tags = question.tag_names();
    let author = question.author_display().to_string();
    let asked = question
        .created_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "unknown date".to_string());

    rsx! {
        div {
            class: "question-card",
            div {
                class: "question-card-counts",
                div {
                    strong { "{question.votes}" }
                    div { class: "count-label", "votes" }
                }
                div {
                    strong { "{question.answers_count}" }
                    div { class: "count-label", "answers" }
                }
            }

            div {
                class: "question-card-body",
                h3 {
                    if let Some(id) = question.key() {
                        a { href: "/questions/{id}", "{question.title}" }
                    } else {
                        span { "{question.title}" }
                    }
                }
                p { "{truncate(&question.text, 150)}" }

                div {
                    class: "question-card-footer",
                    div {
                        for tag in tags {
                            TagBadge { name: tag }
                        }
                    }
                    div {
                        class: "question-card-byline",
                        span { class: "muted", "asked {asked} " }
                        if let Some(author_id) = question.author_id {
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
