//! Tags index: all tags with question counts, filterable by name.

use api::Tag;
use dioxus::prelude::*;
use ui::format::truncate;
use ui::use_api;

#[component]
pub fn Tags() -> Element {
    let api = use_api();
    let mut tags = use_signal(Vec::<Tag>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(String::new);

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            loading.set(true);
            match api.all_tags().await {
                Ok(list) => {
                    tags.set(list);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("loading tags failed: {e}");
                    error.set(Some(
                        "Failed to load tags. Please try again later.".to_string(),
                    ));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            p { class: "muted centered", "Loading..." }
        };
    }
    if let Some(err) = error() {
        return rsx! {
            div { class: "form-error", "{err}" }
        };
    }

    let needle = filter().trim().to_lowercase();
    let visible: Vec<Tag> = tags()
        .into_iter()
        .filter(|tag| needle.is_empty() || tag.name.to_lowercase().contains(&needle))
        .collect();

    rsx! {
        h1 { "Tags" }
        p {
            "A tag is a keyword or label that categorizes your question with "
            "other, similar questions. Using the right tags helps others find "
            "and answer your question."
        }

        input {
            class: "tag-filter",
            r#type: "text",
            placeholder: "Filter by tag name",
            value: filter(),
            oninput: move |evt| filter.set(evt.value()),
        }

        if visible.is_empty() {
            p { class: "muted centered", "No tags found matching your criteria." }
        } else {
            div {
                class: "tag-grid",
                for tag in visible {
                    div {
                        class: "tag-card",
                        a { class: "tag-badge", href: "/tags/{tag.name}", "{tag.name}" }
                        p { class: "muted", "{tag.question_count} questions" }
                        if let Some(description) = tag.description.as_deref() {
                            p { "{truncate(description, 100)}" }
                        }
                    }
                }
            }
        }
    }
}
