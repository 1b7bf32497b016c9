//! # Derived view models
//!
//! The backend has no endpoints for profile statistics, activity
//! timelines, or combined search; each is composed here from several
//! gateway calls. Nothing is persisted — every call recomputes from
//! scratch.
//!
//! Failure policy differs deliberately between the two profile views and
//! search: statistics and activity fail as a whole if any underlying
//! fetch fails, while [`global_search`] degrades each failing half to an
//! empty list and never fails once the keyword is valid.

use futures::{join, try_join};

use crate::gateway::{AuthorContent, SearchIndex};
use crate::models::{ActivityEntry, ActivityKind, Answer, SearchResults, UserStatistics};
use crate::validate::require_keyword;
use crate::ApiError;

/// Profile statistics for one author: their question/answer counts,
/// accepted answers, and total votes across both kinds of post.
///
/// The identity is fetched first; the question and answer lists are then
/// fetched concurrently. Any failure fails the whole call.
pub async fn user_statistics(
    api: &impl AuthorContent,
    user_id: &str,
) -> Result<UserStatistics, ApiError> {
    let user = api.user_by_id(user_id).await?;
    let (questions, answers) = try_join!(
        api.questions_by_author(user_id),
        api.answers_by_author(user_id),
    )?;

    let accepted = answers.iter().filter(|a| a.accepted).count();
    let question_votes: i64 = questions.iter().map(|q| q.votes).sum();
    let answer_votes: i64 = answers.iter().map(Answer::net_votes).sum();

    Ok(UserStatistics {
        questions_count: questions.len(),
        answers_count: answers.len(),
        accepted_answers_count: accepted,
        total_votes: question_votes + answer_votes,
        join_date: user.created_at,
        reputation: user.reputation,
        badges: user.badges,
    })
}

/// A user's questions and answers merged into one timeline, most recent
/// first. The sort is stable, so entries sharing a timestamp keep their
/// input order (questions before answers). Empty inputs produce an empty
/// timeline, not an error.
pub async fn user_activity(
    api: &impl AuthorContent,
    user_id: &str,
) -> Result<Vec<ActivityEntry>, ApiError> {
    let (questions, answers) = try_join!(
        api.questions_by_author(user_id),
        api.answers_by_author(user_id),
    )?;

    let mut entries = Vec::with_capacity(questions.len() + answers.len());
    entries.extend(questions.into_iter().map(|q| {
        let link = q
            .key()
            .map(|id| format!("/questions/{id}"))
            .unwrap_or_else(|| "/".to_string());
        ActivityEntry {
            kind: ActivityKind::Question,
            title: q.title,
            date: q.created_at.unwrap_or_default(),
            votes: q.votes,
            accepted: false,
            link,
        }
    }));
    entries.extend(answers.into_iter().map(|a| {
        let link = a
            .question_id
            .map(|id| format!("/questions/{id}"))
            .unwrap_or_else(|| "/".to_string());
        ActivityEntry {
            kind: ActivityKind::Answer,
            title: a
                .question_title
                .clone()
                .unwrap_or_else(|| "Question".to_string()),
            date: a.created_at.clone().unwrap_or_default(),
            votes: a.net_votes(),
            accepted: a.accepted,
            link,
        }
    }));

    // ISO-8601 timestamps order lexicographically; stable sort keeps ties
    // in input order.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(entries)
}

/// Search questions and users with one keyword. A blank keyword is
/// rejected before any request; after that the call cannot fail — a
/// failing half is logged and degraded to an empty list.
pub async fn global_search(
    api: &impl SearchIndex,
    keyword: &str,
) -> Result<SearchResults, ApiError> {
    let keyword = require_keyword(keyword)?;

    let (questions, users) = join!(api.search_questions(keyword), api.search_users(keyword));
    let questions = questions.unwrap_or_else(|e| {
        tracing::warn!("question search failed, degrading to empty: {e}");
        Vec::new()
    });
    let users = users.unwrap_or_else(|e| {
        tracing::warn!("user search failed, degrading to empty: {e}");
        Vec::new()
    });

    Ok(SearchResults { questions, users })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::models::{Identity, Question};

    /// Counting stub: serves fixed fixtures and records every transport
    /// invocation.
    #[derive(Default)]
    struct StubApi {
        calls: AtomicUsize,
        questions: Vec<Question>,
        answers: Vec<Answer>,
        user: Identity,
        fail_question_search: bool,
    }

    impl StubApi {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl AuthorContent for StubApi {
        async fn user_by_id(&self, _id: &str) -> Result<Identity, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.user.clone())
        }

        async fn questions_by_author(&self, _author_id: &str) -> Result<Vec<Question>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.questions.clone())
        }

        async fn answers_by_author(&self, _author_id: &str) -> Result<Vec<Answer>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.answers.clone())
        }
    }

    impl SearchIndex for StubApi {
        async fn search_questions(&self, _keyword: &str) -> Result<Vec<Question>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_question_search {
                Err(ApiError::Status {
                    status: 500,
                    message: "boom".to_string(),
                })
            } else {
                Ok(self.questions.clone())
            }
        }

        async fn search_users(&self, _keyword: &str) -> Result<Vec<Identity>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![self.user.clone()])
        }
    }

    fn fixture() -> StubApi {
        StubApi {
            questions: vec![
                Question {
                    id: Some(1),
                    votes: 3,
                    title: "first".to_string(),
                    created_at: Some("2024-03-01T10:00:00".to_string()),
                    ..Question::default()
                },
                Question {
                    id: Some(2),
                    votes: 5,
                    title: "second".to_string(),
                    created_at: Some("2024-01-01T10:00:00".to_string()),
                    ..Question::default()
                },
            ],
            answers: vec![
                Answer {
                    id: Some(10),
                    question_id: Some(1),
                    upvotes: 4,
                    downvotes: 1,
                    accepted: true,
                    created_at: Some("2024-02-01T10:00:00".to_string()),
                    ..Answer::default()
                },
                Answer {
                    id: Some(11),
                    question_id: Some(2),
                    upvotes: 0,
                    downvotes: 2,
                    accepted: false,
                    created_at: Some("2024-03-01T10:00:00".to_string()),
                    ..Answer::default()
                },
            ],
            user: Identity {
                id: Some(7),
                username: "alice".to_string(),
                reputation: 12,
                created_at: Some("2023-06-01T00:00:00".to_string()),
                ..Identity::default()
            },
            ..StubApi::default()
        }
    }

    #[tokio::test]
    async fn test_user_statistics_counts_and_totals() {
        let api = fixture();
        let stats = user_statistics(&api, "7").await.unwrap();

        assert_eq!(stats.questions_count, 2);
        assert_eq!(stats.answers_count, 2);
        assert_eq!(stats.accepted_answers_count, 1);
        // (3 + 5) + ((4 - 1) + (0 - 2))
        assert_eq!(stats.total_votes, 9);
        assert_eq!(stats.reputation, 12);
        assert_eq!(stats.join_date.as_deref(), Some("2023-06-01T00:00:00"));
    }

    #[tokio::test]
    async fn test_user_activity_sorted_descending_stable() {
        let api = fixture();
        let entries = user_activity(&api, "7").await.unwrap();

        assert_eq!(entries.len(), 4);
        // Two entries share 2024-03-01; the question was extended first,
        // so stable sort keeps it ahead of the answer.
        assert_eq!(entries[0].kind, ActivityKind::Question);
        assert_eq!(entries[0].title, "first");
        assert_eq!(entries[1].kind, ActivityKind::Answer);
        assert_eq!(entries[1].votes, -2);
        assert_eq!(entries[2].kind, ActivityKind::Answer);
        assert!(entries[2].accepted);
        assert_eq!(entries[3].kind, ActivityKind::Question);
        assert_eq!(entries[3].title, "second");
        assert!(entries.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[tokio::test]
    async fn test_user_activity_empty_inputs_resolve_empty() {
        let api = StubApi::default();
        let entries = user_activity(&api, "7").await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_global_search_rejects_blank_keyword_without_transport() {
        let api = fixture();

        for keyword in ["", "   "] {
            let err = global_search(&api, keyword).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidArgument(_)));
        }
        assert_eq!(api.calls(), 0, "no transport call may be issued");
    }

    #[tokio::test]
    async fn test_global_search_degrades_failing_half() {
        let api = StubApi {
            fail_question_search: true,
            ..fixture()
        };

        let results = global_search(&api, "x").await.unwrap();
        assert!(results.questions.is_empty());
        assert_eq!(results.users.len(), 1);
    }
}
