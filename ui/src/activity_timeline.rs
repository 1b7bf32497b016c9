//! Activity timeline: a user's questions and answers grouped by day.

use api::{ActivityEntry, ActivityKind};
use chrono::Utc;
use dioxus::prelude::*;

use crate::format::{long_date, relative_date};

/// Group already-sorted entries by calendar day, preserving order.
pub(crate) fn group_by_day(entries: &[ActivityEntry]) -> Vec<(String, Vec<ActivityEntry>)> {
    let mut groups: Vec<(String, Vec<ActivityEntry>)> = Vec::new();
    for entry in entries {
        let day = entry.date.get(..10).unwrap_or(&entry.date).to_string();
        match groups.last_mut() {
            Some((last_day, items)) if *last_day == day => items.push(entry.clone()),
            _ => groups.push((day, vec![entry.clone()])),
        }
    }
    groups
}

fn kind_class(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Question => "badge badge-question",
        ActivityKind::Answer => "badge badge-answer",
    }
}

fn kind_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Question => "Asked",
        ActivityKind::Answer => "Answered",
    }
}

/// Timeline tab content for a profile page.
#[component]
pub fn ActivityTimeline(entries: Vec<ActivityEntry>, loading: bool) -> Element {
    if loading {
        return rsx! {
            p { class: "muted centered", "Loading activity..." }
        };
    }
    if entries.is_empty() {
        return rsx! {
            p { class: "muted centered", "No activity to display." }
        };
    }

    let now = Utc::now();
    let groups: Vec<(String, Vec<(ActivityEntry, String)>)> = group_by_day(&entries)
        .into_iter()
        .map(|(day, items)| {
            let day_label = long_date(&day);
            let rows = items
                .into_iter()
                .map(|entry| {
                    let when = relative_date(&entry.date, now);
                    (entry, when)
                })
                .collect();
            (day_label, rows)
        })
        .collect();

    rsx! {
        div {
            class: "activity-timeline",
            h5 { "Recent Activity" }

            for (day_label, rows) in groups {
                div {
                    class: "activity-day",
                    strong { "{day_label}" }
                }
                for (entry, when) in rows {
                    div {
                        class: "activity-entry",
                        div {
                            class: "activity-entry-head",
                            span { class: kind_class(entry.kind), "{kind_label(entry.kind)}" }
                            if entry.accepted {
                                span { class: "badge badge-accepted", "Accepted" }
                            }
                            span { class: "muted", "{when}" }
                        }
                        h6 {
                            a { href: "{entry.link}", "{entry.title}" }
                        }
                        span { class: "muted", "{entry.votes} votes" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str, title: &str) -> ActivityEntry {
        ActivityEntry {
            kind: ActivityKind::Question,
            title: title.to_string(),
            date: date.to_string(),
            votes: 0,
            accepted: false,
            link: "/".to_string(),
        }
    }

    #[test]
    fn test_group_by_day_preserves_order() {
        let entries = vec![
            entry("2024-03-02T10:00:00", "a"),
            entry("2024-03-02T08:00:00", "b"),
            entry("2024-03-01T23:00:00", "c"),
        ];
        let groups = group_by_day(&entries);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "2024-03-02");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[0].title, "a");
        assert_eq!(groups[1].0, "2024-03-01");
    }

    #[test]
    fn test_group_by_day_handles_short_dates() {
        let entries = vec![entry("", "x")];
        let groups = group_by_day(&entries);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "");
    }
}
