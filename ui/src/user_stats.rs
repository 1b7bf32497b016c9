//! Profile statistics panel: reputation level, counters, badges.

use api::UserStatistics;
use chrono::Utc;
use dioxus::prelude::*;

use crate::format::{long_date, member_duration};

/// Named reputation tier shown on the stats tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Level {
    pub number: u8,
    pub title: &'static str,
}

/// Progress within the current tier, as shown by the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LevelProgress {
    pub current: i64,
    pub max: i64,
    pub percent: i64,
}

const TIERS: [(i64, &str); 5] = [
    (10, "Newcomer"),
    (50, "Beginner"),
    (200, "Regular"),
    (500, "Established"),
    (1000, "Trusted"),
];

pub(crate) fn level(reputation: i64) -> Level {
    for (number, (ceiling, title)) in TIERS.iter().copied().enumerate() {
        if reputation < ceiling {
            return Level {
                number: number as u8 + 1,
                title,
            };
        }
    }
    Level {
        number: 6,
        title: "Expert",
    }
}

pub(crate) fn level_progress(reputation: i64) -> LevelProgress {
    let mut floor = 0;
    for (ceiling, _) in TIERS {
        if reputation < ceiling {
            let span = ceiling - floor;
            let current = reputation - floor;
            return LevelProgress {
                current,
                max: span,
                percent: current * 100 / span,
            };
        }
        floor = ceiling;
    }
    LevelProgress {
        current: reputation,
        max: reputation,
        percent: 100,
    }
}

/// Statistics tab content. `stats` is `None` until the aggregate call
/// resolves.
#[component]
pub fn UserStatsPanel(stats: Option<UserStatistics>, loading: bool) -> Element {
    let Some(stats) = stats else {
        return rsx! {
            p {
                class: "muted centered",
                if loading { "Loading statistics..." } else { "No statistics available." }
            }
        };
    };

    let level = level(stats.reputation);
    let progress = level_progress(stats.reputation);
    let joined = stats
        .join_date
        .as_deref()
        .map(long_date)
        .unwrap_or_else(|| "Unknown".to_string());
    let member_for = stats
        .join_date
        .as_deref()
        .map(|d| member_duration(d, Utc::now()))
        .unwrap_or_else(|| "Unknown".to_string());
    let badges: Vec<(String, String)> = stats
        .badges
        .iter()
        .map(|b| (format!("badge badge-{}", b.r#type), b.name.clone()))
        .collect();

    rsx! {
        div {
            class: "user-stats",
            h5 { "Reputation & Stats" }

            div {
                class: "stats-level",
                h6 { "Level {level.number}: {level.title}" }
                div {
                    class: "progress",
                    div {
                        class: "progress-bar",
                        style: "width: {progress.percent}%",
                        "{stats.reputation} rep"
                    }
                }
                span {
                    class: "muted",
                    "{progress.current} / {progress.max} to next level"
                }
            }

            div {
                class: "stats-counters",
                div {
                    h3 { "{stats.questions_count}" }
                    div { "Questions" }
                }
                div {
                    h3 { "{stats.answers_count}" }
                    div { "Answers" }
                }
                div {
                    h3 { "{stats.accepted_answers_count}" }
                    div { "Accepted" }
                }
            }

            div {
                class: "stats-details",
                div { strong { "Total Votes: " } "{stats.total_votes}" }
                div { strong { "Member Since: " } "{joined}" }
                div { strong { "Member For: " } "{member_for}" }
            }

            div {
                class: "stats-badges",
                strong { "Badges:" }
                if badges.is_empty() {
                    span { class: "muted", " No badges yet" }
                } else {
                    for (class, name) in badges {
                        span { class: "{class}", "{name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level(0).title, "Newcomer");
        assert_eq!(level(9).title, "Newcomer");
        assert_eq!(level(10).title, "Beginner");
        assert_eq!(level(199).title, "Regular");
        assert_eq!(level(500).title, "Trusted");
        assert_eq!(level(1000).title, "Expert");
        assert_eq!(level(1000).number, 6);
    }

    #[test]
    fn test_level_progress_within_tier() {
        let p = level_progress(30);
        assert_eq!(p.current, 20);
        assert_eq!(p.max, 40);
        assert_eq!(p.percent, 50);
    }

    #[test]
    fn test_level_progress_saturates_at_expert() {
        let p = level_progress(5000);
        assert_eq!(p.percent, 100);
    }
}
