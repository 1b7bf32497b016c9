//! Search results page: combined question/user results with tab filters
//! and client-side question sorting.

use api::{aggregate, SearchResults};
use dioxus::prelude::*;
use ui::format::{initial, truncate};
use ui::{use_api, QuestionCard};

use super::home::{sort_questions, SortOrder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResultTab {
    All,
    Questions,
    Users,
}

#[component]
pub fn Search(q: String) -> Element {
    let api = use_api();
    let mut results = use_signal(SearchResults::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut tab = use_signal(|| ResultTab::All);
    let mut sort = use_signal(|| SortOrder::Newest);

    let mut query = use_signal(|| q.clone());
    if *query.peek() != q {
        query.set(q.clone());
    }

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let keyword = query();
            loading.set(true);
            if keyword.trim().is_empty() {
                results.set(SearchResults::default());
                error.set(None);
                loading.set(false);
                return;
            }
            match aggregate::global_search(&api, &keyword).await {
                Ok(found) => {
                    results.set(found);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("search failed: {e}");
                    error.set(Some(format!("Failed to load search results: {e}")));
                    results.set(SearchResults::default());
                }
            }
            loading.set(false);
        }
    });

    let current = results();
    let question_count = current.questions.len();
    let user_count = current.users.len();
    let total = question_count + user_count;
    let active_tab = tab();

    let mut sorted_questions = current.questions.clone();
    sort_questions(&mut sorted_questions, sort());

    let show_questions = matches!(active_tab, ResultTab::All | ResultTab::Questions);
    let show_users = matches!(active_tab, ResultTab::All | ResultTab::Users);

    rsx! {
        h1 { "Search Results for \"{query}\"" }

        if loading() {
            p { class: "muted centered", "Loading..." }
        } else if let Some(err) = error() {
            div { class: "form-error", "{err}" }
        } else {
            div {
                class: "search-layout",

                aside {
                    class: "search-sidebar",
                    h5 { "Filter By" }
                    nav {
                        class: "search-tabs",
                        button {
                            class: if active_tab == ResultTab::All { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(ResultTab::All),
                            "All Results ({total})"
                        }
                        button {
                            class: if active_tab == ResultTab::Questions { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(ResultTab::Questions),
                            "Questions ({question_count})"
                        }
                        button {
                            class: if active_tab == ResultTab::Users { "tab active" } else { "tab" },
                            onclick: move |_| tab.set(ResultTab::Users),
                            "Users ({user_count})"
                        }
                    }

                    if show_questions && question_count > 0 {
                        h5 { "Sort Questions" }
                        select {
                            onchange: move |evt| sort.set(SortOrder::from_value(&evt.value())),
                            option { value: "newest", "Newest" }
                            option { value: "votes", "Most Votes" }
                            option { value: "answers", "Most Answers" }
                        }
                    }
                }

                section {
                    class: "search-results",

                    if total == 0 {
                        div {
                            class: "centered",
                            p { "No results found for \"{query}\"." }
                            p {
                                "Try different keywords or "
                                a { href: "/ask", "ask a question" }
                                "."
                            }
                        }
                    }

                    if show_questions && question_count > 0 {
                        if active_tab == ResultTab::All {
                            h3 { "Questions ({question_count})" }
                        }
                        for question in sorted_questions {
                            QuestionCard { question }
                        }
                    }
                    if active_tab == ResultTab::Questions && question_count == 0 {
                        p { class: "muted centered", "No questions found for \"{query}\"." }
                    }

                    if show_users && user_count > 0 {
                        if active_tab == ResultTab::All {
                            h3 { "Users ({user_count})" }
                        }
                        for user in current.users.clone() {
                            div {
                                class: "user-card",
                                span { class: "user-avatar-lg", "{initial(&user.username)}" }
                                div {
                                    h5 {
                                        if let Some(id) = user.key() {
                                            a { href: "/users/{id}", "{user.username}" }
                                        } else {
                                            span { "{user.username}" }
                                        }
                                    }
                                    if let Some(email) = user.email.as_deref() {
                                        div { class: "muted", "{email}" }
                                    }
                                    if user.reputation > 0 {
                                        span { class: "badge", "{user.reputation} reputation" }
                                    }
                                    if let Some(bio) = user.bio.as_deref() {
                                        p { class: "muted", "{truncate(bio, 120)}" }
                                    }
                                }
                            }
                        }
                    }
                    if active_tab == ResultTab::Users && user_count == 0 {
                        p { class: "muted centered", "No users found for \"{query}\"." }
                    }
                }
            }
        }
    }
}
