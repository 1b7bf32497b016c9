//! Vote calls (`/votes/...`). Fire-and-forget: nothing is cached locally;
//! callers re-fetch the affected entity to observe the new count.

use serde::Serialize;

use crate::client::ApiClient;
use crate::models::VoteType;
use crate::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionVoteBody {
    user_id: i64,
    question_id: i64,
    vote_type: VoteType,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerVoteBody {
    user_id: i64,
    answer_id: i64,
    vote_type: VoteType,
}

impl ApiClient {
    /// POST `/votes/question`
    pub async fn vote_question(
        &self,
        user_id: i64,
        question_id: i64,
        vote_type: VoteType,
    ) -> Result<(), ApiError> {
        self.post_ok(
            "/votes/question",
            &QuestionVoteBody {
                user_id,
                question_id,
                vote_type,
            },
        )
        .await
    }

    /// POST `/votes/answer`
    pub async fn vote_answer(
        &self,
        user_id: i64,
        answer_id: i64,
        vote_type: VoteType,
    ) -> Result<(), ApiError> {
        self.post_ok(
            "/votes/answer",
            &AnswerVoteBody {
                user_id,
                answer_id,
                vote_type,
            },
        )
        .await
    }
}
