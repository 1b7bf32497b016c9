//! Question listings: the home page and its tag-filtered variant.

use api::Question;
use dioxus::prelude::*;
use ui::{use_api, QuestionCard};

/// Client-side sort orders shared by the listings and the search page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SortOrder {
    Newest,
    Votes,
    Answers,
}

impl SortOrder {
    pub(crate) fn from_value(value: &str) -> Self {
        match value {
            "votes" => Self::Votes,
            "answers" => Self::Answers,
            _ => Self::Newest,
        }
    }
}

/// Sort a fetched listing in place. ISO timestamps order lexicographically.
pub(crate) fn sort_questions(questions: &mut [Question], order: SortOrder) {
    match order {
        SortOrder::Newest => questions.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Votes => questions.sort_by(|a, b| b.votes.cmp(&a.votes)),
        SortOrder::Answers => questions.sort_by(|a, b| b.answers_count.cmp(&a.answers_count)),
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        QuestionListing { tag: None::<String> }
    }
}

#[component]
pub fn TagQuestions(tag_name: String) -> Element {
    rsx! {
        QuestionListing { tag: Some(tag_name) }
    }
}

#[component]
fn QuestionListing(tag: Option<String>) -> Element {
    let api = use_api();
    let mut questions = use_signal(Vec::<Question>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sort = use_signal(|| SortOrder::Newest);

    // Track the route parameter in a signal so the loader re-runs when it
    // changes; a stale in-flight load is dropped with its future.
    let mut tag_signal = use_signal(|| tag.clone());
    if *tag_signal.peek() != tag {
        tag_signal.set(tag.clone());
    }

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let tag = tag_signal();
            loading.set(true);
            let fetched = match tag.as_deref() {
                Some(tag) => api.questions_by_tag(tag).await,
                None => api.all_questions().await,
            };
            match fetched {
                Ok(list) => {
                    questions.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("loading questions failed: {e}");
                    error.set(Some(
                        "Failed to load questions. Please try again later.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    let heading = match tag_signal() {
        Some(tag) => format!("Questions tagged [{tag}]"),
        None => "All Questions".to_string(),
    };
    let mut sorted = questions();
    sort_questions(&mut sorted, sort());
    let count = sorted.len();

    rsx! {
        div {
            class: "listing-header",
            h1 { "{heading}" }
            a { class: "primary-link", href: "/ask", "Ask Question" }
        }

        div {
            class: "listing-toolbar",
            span { strong { "{count}" } " questions" }
            select {
                onchange: move |evt| sort.set(SortOrder::from_value(&evt.value())),
                option { value: "newest", "Newest" }
                option { value: "votes", "Most Votes" }
                option { value: "answers", "Most Answers" }
            }
        }

        if loading() {
            p { class: "muted centered", "Loading..." }
        } else if let Some(err) = error() {
            div { class: "form-error", "{err}" }
        } else if sorted.is_empty() {
            div {
                class: "centered",
                p { "No questions found." }
                a { class: "primary-link", href: "/ask", "Ask a Question" }
            }
        } else {
            for question in sorted {
                QuestionCard { question }
            }
        }
    }
}
