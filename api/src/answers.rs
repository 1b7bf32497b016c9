//! Answer resource calls (`/answers/...`).

use serde::Serialize;

use crate::client::ApiClient;
use crate::models::{Answer, AnswerEdit};
use crate::validate::{require_id, require_numeric};
use crate::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DebugAnswerBody<'a> {
    id: String,
    author_id: String,
    text: &'a str,
    image: &'a str,
}

impl ApiClient {
    /// GET `/answers/all`
    pub async fn all_answers(&self) -> Result<Vec<Answer>, ApiError> {
        self.get_json("/answers/all").await
    }

    /// GET `/answers/id/:id`
    pub async fn answer_by_id(&self, id: &str) -> Result<Answer, ApiError> {
        let id = require_id("answer ID", id)?;
        self.get_json(&format!("/answers/id/{id}")).await
    }

    /// GET `/answers/question/:id`
    pub async fn answers_by_question(&self, question_id: &str) -> Result<Vec<Answer>, ApiError> {
        let question_id = require_id("question ID", question_id)?;
        self.get_json(&format!("/answers/question/{question_id}")).await
    }

    /// GET `/answers/author/:id`
    pub async fn answers_by_author(&self, author_id: &str) -> Result<Vec<Answer>, ApiError> {
        let author_id = require_id("author ID", author_id)?;
        self.get_json(&format!("/answers/author/{author_id}")).await
    }

    /// POST `/answers/direct-create` — both identifiers are numerically
    /// coerced into query parameters; a non-numeric id is rejected before
    /// any request is sent.
    pub async fn create_answer(
        &self,
        author_id: &str,
        question_id: &str,
        text: &str,
        code: &str,
    ) -> Result<Answer, ApiError> {
        let question_id = require_numeric("question ID", question_id)?;
        let author_id = require_numeric("author ID", author_id)?;
        if text.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "Answer text cannot be empty".to_string(),
            ));
        }

        let question_id = question_id.to_string();
        let author_id = author_id.to_string();
        self.post_query(
            "/answers/direct-create",
            &[
                ("questionId", question_id.as_str()),
                ("authorId", author_id.as_str()),
                ("text", text.trim()),
                ("image", code),
            ],
        )
        .await
    }

    /// POST `/answers/debug` — diagnostic endpoint taking the raw ids as
    /// strings in a JSON body.
    pub async fn debug_answer(
        &self,
        author_id: &str,
        question_id: &str,
        text: &str,
        code: &str,
    ) -> Result<Answer, ApiError> {
        let question_id = require_id("question ID", question_id)?;
        let author_id = require_id("author ID", author_id)?;
        let body = DebugAnswerBody {
            id: question_id.to_string(),
            author_id: author_id.to_string(),
            text: if text.is_empty() { "Test answer" } else { text },
            image: code,
        };
        self.post_json("/answers/debug", &body).await
    }

    /// PUT `/answers/update/:id?userId=`
    pub async fn update_answer(
        &self,
        id: i64,
        edit: &AnswerEdit,
        user_id: i64,
    ) -> Result<Answer, ApiError> {
        self.put_json(&format!("/answers/update/{id}?userId={user_id}"), edit)
            .await
    }

    /// DELETE `/answers/delete/:id?userId=`
    pub async fn delete_answer(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        let user_id = user_id.to_string();
        self.delete_ok(
            &format!("/answers/delete/{id}"),
            &[("userId", user_id.as_str())],
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ApiClient, ApiConfig};
    use crate::ApiError;

    /// A client whose origin is unroutable: any call that actually hits
    /// the network comes back as `Transport`, so an `InvalidArgument`
    /// result proves validation short-circuited first.
    fn unroutable() -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
        })
    }

    #[tokio::test]
    async fn test_create_answer_rejects_non_numeric_ids_before_any_request() {
        let api = unroutable();

        let err = api
            .create_answer("abc", "3", "some text", "")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));

        let err = api
            .create_answer("7", "undefined", "some text", "")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_create_answer_rejects_blank_text() {
        let err = unroutable()
            .create_answer("7", "3", "   ", "")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_answer_lookups_reject_sentinel_ids() {
        let api = unroutable();
        for bad in ["undefined", "null", ""] {
            let err = api.answers_by_question(bad).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidArgument(_)));
        }
    }
}
