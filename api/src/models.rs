//! # Client-side views of the backend's resources
//!
//! The backend emits its identifiers under two historically inconsistent
//! names (`id`/`questionId` on questions, `id`/`userId` on users), tags
//! either as a comma-joined string or as a list of tag objects, and author
//! names under two different fields. Every shape is accepted here and
//! reconciled once, immediately after deserialization, so downstream code
//! sees one canonical form:
//!
//! - [`Identity::normalize`] / [`Question::normalize`] copy whichever id
//!   field is present into the other (idempotent).
//! - [`Question::tag_names`] projects both tag encodings into a plain
//!   ordered list of names.
//! - [`Answer::net_votes`] computes the displayed score; it is never
//!   stored.
//!
//! [`UserStatistics`], [`ActivityEntry`], and [`SearchResults`] are
//! derived view models built by [`crate::aggregate`]; they are recomputed
//! per request and intentionally carry no serde derives.

use serde::{Deserialize, Serialize};

/// The authenticated user's profile, as held by the session and shown on
/// profile pages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Identity {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub username: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub is_moderator: bool,
    pub banned: bool,
    pub reputation: i64,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub created_at: Option<String>,
    pub badges: Vec<Badge>,
}

impl Identity {
    /// Reconcile the dual-named identifier so both fields agree.
    /// Idempotent: a second pass is a no-op.
    pub fn normalize(mut self) -> Self {
        match (self.id, self.user_id) {
            (Some(v), None) => self.user_id = Some(v),
            (None, Some(v)) => self.id = Some(v),
            _ => {}
        }
        self
    }

    /// Canonical identifier, whichever field the backend filled.
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.user_id)
    }
}

/// A badge earned by a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badge {
    pub name: String,
    /// Badge tier: "gold", "silver", or "bronze".
    pub r#type: String,
}

/// Payload for the account creation endpoint.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
}

/// A question, in whichever shape the backend sent it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: Option<i64>,
    pub question_id: Option<i64>,
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub tags: Option<TagsField>,
    pub tag_list: Option<Vec<TagRef>>,
    pub votes: i64,
    pub answers_count: i64,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub author_username: Option<String>,
    pub accepted_answer_id: Option<i64>,
    pub created_at: Option<String>,
}

impl Question {
    /// Reconcile `id`/`questionId` so both fields agree. Idempotent.
    pub fn normalize(mut self) -> Self {
        match (self.id, self.question_id) {
            (Some(v), None) => self.question_id = Some(v),
            (None, Some(v)) => self.id = Some(v),
            _ => {}
        }
        self
    }

    /// Canonical identifier, whichever field the backend filled.
    pub fn key(&self) -> Option<i64> {
        self.id.or(self.question_id)
    }

    /// Tag names in their original order, regardless of which of the two
    /// wire encodings the backend used.
    pub fn tag_names(&self) -> Vec<String> {
        match &self.tags {
            Some(TagsField::Joined(joined)) => joined
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            Some(TagsField::List(list)) => list.iter().map(|t| t.name().to_string()).collect(),
            None => self
                .tag_list
                .as_deref()
                .unwrap_or_default()
                .iter()
                .map(|t| t.name().to_string())
                .collect(),
        }
    }

    /// Author display name, falling back across the two fields the
    /// backend uses.
    pub fn author_display(&self) -> &str {
        self.author_name
            .as_deref()
            .or(self.author_username.as_deref())
            .unwrap_or("User")
    }
}

/// Tags as they appear on the wire: either comma-joined or a list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsField {
    Joined(String),
    List(Vec<TagRef>),
}

/// One element of a tag list: a bare name or a full tag object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Name(String),
    Full(Tag),
}

impl TagRef {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Full(tag) => &tag.name,
        }
    }
}

/// Fields a question author may change on an existing question.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEdit {
    pub title: String,
    pub text: String,
    pub image: Option<String>,
    pub tags: Option<String>,
}

/// An answer to a question. The `image` field carries the answer's code
/// block; that naming is the backend's.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub id: Option<i64>,
    pub question_id: Option<i64>,
    pub question_title: Option<String>,
    pub text: String,
    pub image: Option<String>,
    pub upvotes: i64,
    pub downvotes: i64,
    pub accepted: bool,
    pub author_id: Option<i64>,
    pub author_username: Option<String>,
    pub created_at: Option<String>,
}

impl Answer {
    /// Displayed score. Computed, never stored.
    pub fn net_votes(&self) -> i64 {
        self.upvotes - self.downvotes
    }
}

/// Fields an answer author may change on an existing answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEdit {
    pub text: String,
    pub image: Option<String>,
}

/// A tag, from the tags index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
    pub question_count: i64,
    pub description: Option<String>,
}

/// Direction of a vote. Fire-and-forget; never cached locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteType {
    Up,
    Down,
}

/// Profile statistics for one author. Derived, never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStatistics {
    pub questions_count: usize,
    pub answers_count: usize,
    pub accepted_answers_count: usize,
    pub total_votes: i64,
    pub join_date: Option<String>,
    pub reputation: i64,
    pub badges: Vec<Badge>,
}

/// One row of a user's activity timeline. Derived, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub date: String,
    pub votes: i64,
    pub accepted: bool,
    pub link: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Question,
    Answer,
}

/// Combined result of searching questions and users at once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub users: Vec<Identity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_normalize_fills_missing_side() {
        let from_id = Question {
            id: Some(3),
            ..Question::default()
        }
        .normalize();
        assert_eq!(from_id.id, Some(3));
        assert_eq!(from_id.question_id, Some(3));

        let from_question_id = Question {
            question_id: Some(9),
            ..Question::default()
        }
        .normalize();
        assert_eq!(from_question_id.id, Some(9));
        assert_eq!(from_question_id.question_id, Some(9));
    }

    #[test]
    fn test_question_normalize_is_idempotent() {
        let once = Question {
            question_id: Some(5),
            ..Question::default()
        }
        .normalize();
        let twice = once.clone().normalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_leaves_disagreeing_ids_alone() {
        let q = Question {
            id: Some(1),
            question_id: Some(2),
            ..Question::default()
        }
        .normalize();
        assert_eq!(q.id, Some(1));
        assert_eq!(q.question_id, Some(2));
    }

    #[test]
    fn test_identity_normalize_fills_missing_side() {
        let identity = Identity {
            user_id: Some(7),
            ..Identity::default()
        }
        .normalize();
        assert_eq!(identity.id, Some(7));
        assert_eq!(identity.user_id, Some(7));
        assert_eq!(identity.key(), Some(7));
    }

    #[test]
    fn test_tags_from_joined_string() {
        let q: Question =
            serde_json::from_str(r#"{"id":1,"tags":"java, spring ,hibernate,"}"#).unwrap();
        assert_eq!(q.tag_names(), vec!["java", "spring", "hibernate"]);
    }

    #[test]
    fn test_tags_from_object_list() {
        let q: Question = serde_json::from_str(
            r#"{"id":1,"tagList":[{"id":4,"name":"rust","questionCount":2},"wasm"]}"#,
        )
        .unwrap();
        assert_eq!(q.tag_names(), vec!["rust", "wasm"]);
    }

    #[test]
    fn test_tags_field_takes_priority_over_tag_list() {
        let q: Question =
            serde_json::from_str(r#"{"id":1,"tags":["a","b"],"tagList":["c"]}"#).unwrap();
        assert_eq!(q.tag_names(), vec!["a", "b"]);
    }

    #[test]
    fn test_answer_net_votes() {
        let answer = Answer {
            upvotes: 4,
            downvotes: 1,
            ..Answer::default()
        };
        assert_eq!(answer.net_votes(), 3);
    }

    #[test]
    fn test_identity_round_trips_through_camel_case_json() {
        let raw = r#"{"id":7,"username":"alice","isModerator":true,"createdAt":"2024-01-01T00:00:00"}"#;
        let identity: Identity = serde_json::from_str(raw).unwrap();
        assert!(identity.is_moderator);
        assert_eq!(identity.created_at.as_deref(), Some("2024-01-01T00:00:00"));

        let normalized = identity.normalize();
        let stored = serde_json::to_string(&normalized).unwrap();
        let restored: Identity = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, normalized);
    }

    #[test]
    fn test_vote_type_wire_format() {
        assert_eq!(serde_json::to_string(&VoteType::Up).unwrap(), "\"UP\"");
        assert_eq!(serde_json::to_string(&VoteType::Down).unwrap(), "\"DOWN\"");
    }
}
