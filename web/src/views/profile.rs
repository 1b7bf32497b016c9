//! User profile page with tabs: profile, stats, activity, questions,
//! answers. Owners can edit their profile inline; moderators get
//! ban/moderator toggles on other users' profiles.

use api::{aggregate, ActivityEntry, Answer, Identity, Question, UserStatistics};
use dioxus::prelude::*;
use ui::format::{initial, long_date, short_date};
use ui::{use_api, use_session, ActivityTimeline, ProfileForm, QuestionCard, UserStatsPanel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ProfileTab {
    Profile,
    Stats,
    Activity,
    Questions,
    Answers,
}

impl ProfileTab {
    const ALL: [(Self, &'static str); 5] = [
        (Self::Profile, "Profile"),
        (Self::Stats, "Stats"),
        (Self::Activity, "Activity"),
        (Self::Questions, "Questions"),
        (Self::Answers, "Answers"),
    ];
}

#[component]
pub fn UserProfile(id: String) -> Element {
    let api = use_api();
    let session = use_session();

    let mut user = use_signal(|| Option::<Identity>::None);
    let mut questions = use_signal(Vec::<Question>::new);
    let mut answers = use_signal(Vec::<Answer>::new);
    let mut activities = use_signal(Vec::<ActivityEntry>::new);
    let mut stats = use_signal(|| Option::<UserStatistics>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut tab = use_signal(|| ProfileTab::Profile);
    let mut editing = use_signal(|| false);

    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let loader_api = api.clone();
    let mut loader = use_resource(move || {
        let api = loader_api.clone();
        async move {
            let id = id_signal();
            let active = tab();
            loading.set(true);

            match api.user_by_id(&id).await {
                Ok(loaded) => {
                    user.set(Some(loaded));
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!("loading user {id} failed: {e}");
                    error.set(Some(
                        "Failed to load user profile. Please try again later.".to_string(),
                    ));
                    loading.set(false);
                    return;
                }
            }

            // Each tab fetches exactly what it renders.
            if matches!(active, ProfileTab::Questions | ProfileTab::Stats) {
                match api.questions_by_author(&id).await {
                    Ok(list) => questions.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            if matches!(active, ProfileTab::Answers | ProfileTab::Stats) {
                match api.answers_by_author(&id).await {
                    Ok(list) => answers.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            if active == ProfileTab::Activity {
                match aggregate::user_activity(&api, &id).await {
                    Ok(list) => activities.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            if active == ProfileTab::Stats {
                match aggregate::user_statistics(&api, &id).await {
                    Ok(computed) => stats.set(Some(computed)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }

            loading.set(false);
        }
    });

    let save_api = api.clone();
    let handle_profile_save = use_callback(move |updated: Identity| {
        let api = save_api.clone();
        spawn(async move {
            let Some(user_id) = updated.key() else {
                return;
            };
            match api.update_user(&user_id.to_string(), &updated).await {
                Ok(_) => {
                    editing.set(false);
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("profile update failed: {e}");
                    error.set(Some(format!("Failed to update profile: {e}")));
                }
            }
        });
    });

    // Moderator actions are full-replace updates with one flag flipped,
    // followed by a re-fetch.
    let toggle_api = api.clone();
    let handle_toggle = use_callback(move |flip: fn(Identity) -> Identity| {
        let Some(target) = user.peek().clone() else {
            return;
        };
        let api = toggle_api.clone();
        spawn(async move {
            let Some(target_id) = target.key() else {
                return;
            };
            let updated = flip(target);
            match api.update_user(&target_id.to_string(), &updated).await {
                Ok(_) => loader.restart(),
                Err(e) => {
                    tracing::error!("moderator update failed: {e}");
                    error.set(Some("Failed to update user status".to_string()));
                }
            }
        });
    });

    if loading() && user.read().is_none() {
        return rsx! {
            p { class: "muted centered", "Loading..." }
        };
    }

    let Some(current) = user() else {
        let message = error().unwrap_or_else(|| "User not found".to_string());
        return rsx! {
            div { class: "form-error", "{message}" }
        };
    };

    let viewer = session.read().current().and_then(|u| u.key());
    let viewer_is_moderator = session.read().is_moderator();
    let is_own_profile = viewer.is_some() && viewer == current.key();
    let member_since = current
        .created_at
        .as_deref()
        .map(short_date)
        .unwrap_or_else(|| "unknown".to_string());
    let question_list = questions();
    let active_tab = tab();

    rsx! {
        div {
            class: "profile-layout",

            aside {
                class: "profile-sidebar",
                div {
                    class: "profile-card",
                    div { class: "user-avatar-lg", "{initial(&current.username)}" }
                    h4 { "{current.username}" }
                    p { class: "muted", "Member since {member_since}" }

                    if let Some(location) = current.location.as_deref() {
                        p { class: "muted", "{location}" }
                    }
                    if let Some(website) = current.website.as_deref() {
                        p { a { href: "{website}", "Website" } }
                    }

                    div {
                        class: "profile-counters",
                        div {
                            h5 { "{question_list.len()}" }
                            span { class: "muted", "Questions" }
                        }
                        div {
                            h5 { "{answers.read().len()}" }
                            span { class: "muted", "Answers" }
                        }
                        div {
                            h5 { "{current.reputation}" }
                            span { class: "muted", "Reputation" }
                        }
                    }

                    if current.is_moderator {
                        span { class: "badge badge-moderator", "Moderator" }
                    }
                    if current.banned {
                        span { class: "badge badge-banned", "Banned" }
                    }
                }

                if is_own_profile && !editing() && active_tab == ProfileTab::Profile {
                    button {
                        class: "secondary full-width",
                        onclick: move |_| editing.set(true),
                        "Edit Profile"
                    }
                }

                if viewer_is_moderator && !is_own_profile {
                    div {
                        class: "profile-card",
                        h6 { "Moderator Actions" }
                        button {
                            class: "secondary full-width",
                            onclick: move |_| handle_toggle.call(|mut u| {
                                u.banned = !u.banned;
                                u
                            }),
                            if current.banned { "Unban User" } else { "Ban User" }
                        }
                        button {
                            class: "secondary full-width",
                            onclick: move |_| handle_toggle.call(|mut u| {
                                u.is_moderator = !u.is_moderator;
                                u
                            }),
                            if current.is_moderator { "Remove Moderator" } else { "Make Moderator" }
                        }
                    }
                }
            }

            section {
                class: "profile-main",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                if editing() {
                    ProfileForm {
                        user: current.clone(),
                        on_save: handle_profile_save,
                        on_cancel: move |_| editing.set(false),
                    }
                } else {
                    nav {
                        class: "profile-tabs",
                        for (value, label) in ProfileTab::ALL {
                            button {
                                class: if active_tab == value { "tab active" } else { "tab" },
                                onclick: move |_| {
                                    tab.set(value);
                                    if value != ProfileTab::Profile {
                                        editing.set(false);
                                    }
                                },
                                "{label}"
                            }
                        }
                    }

                    {match active_tab {
                        ProfileTab::Profile => rsx! {
                            ProfileDetails { user: current.clone() }
                        },
                        ProfileTab::Stats => rsx! {
                            UserStatsPanel { stats: stats(), loading: loading() }
                        },
                        ProfileTab::Activity => rsx! {
                            ActivityTimeline { entries: activities(), loading: loading() }
                        },
                        ProfileTab::Questions => rsx! {
                            h5 { "{question_list.len()} Questions" }
                            if question_list.is_empty() {
                                p { class: "muted centered", "This user hasn't asked any questions yet." }
                            } else {
                                for question in question_list {
                                    QuestionCard { question }
                                }
                            }
                        },
                        ProfileTab::Answers => rsx! {
                            UserAnswers { answers: answers() }
                        },
                    }}
                }
            }
        }
    }
}

/// Profile tab body: the plain field listing.
#[component]
fn ProfileDetails(user: Identity) -> Element {
    let joined = user
        .created_at
        .as_deref()
        .map(long_date)
        .unwrap_or_else(|| "Unknown".to_string());
    let email = user.email.clone().unwrap_or_else(|| "Not shared".to_string());

    rsx! {
        div {
            h5 { "Profile Information" }

            if let Some(bio) = user.bio.as_deref() {
                div {
                    class: "profile-about",
                    h6 { class: "muted", "About" }
                    p { "{bio}" }
                }
            }

            dl {
                class: "profile-fields",
                dt { "Username:" }
                dd { "{user.username}" }
                dt { "Email:" }
                dd { "{email}" }
                if let Some(phone) = user.phone_number.as_deref() {
                    dt { "Phone:" }
                    dd { "{phone}" }
                }
                dt { "Reputation:" }
                dd { "{user.reputation}" }
                dt { "Member Since:" }
                dd { "{joined}" }
            }
        }
    }
}

/// Answers tab body: each answer with its score and a link back to the
/// question it belongs to.
#[component]
fn UserAnswers(answers: Vec<Answer>) -> Element {
    if answers.is_empty() {
        return rsx! {
            p { class: "muted centered", "This user hasn't answered any questions yet." }
        };
    }

    rsx! {
        h5 { "{answers.len()} Answers" }
        for answer in answers {
            div {
                class: "user-answer",
                div {
                    class: "user-answer-head",
                    span { class: "vote-count", "{answer.net_votes()}" }
                    if answer.accepted {
                        span { class: "badge badge-accepted", "Accepted" }
                    }
                    if let Some(question_id) = answer.question_id {
                        a {
                            href: "/questions/{question_id}",
                            {answer.question_title.clone().unwrap_or_else(|| "View question".to_string())}
                        }
                    }
                }
                p { "{answer.text}" }
            }
        }
    }
}
