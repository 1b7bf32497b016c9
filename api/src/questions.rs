//! Question resource calls (`/questions/...`).
//!
//! Every question-shaped payload — single or list, from any endpoint —
//! passes through [`Question::normalize`] before it reaches a caller, so
//! the dual `id`/`questionId` naming is reconciled uniformly.

use serde::Serialize;

use crate::client::ApiClient;
use crate::models::{Question, QuestionEdit};
use crate::validate::{require_id, require_keyword};
use crate::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewQuestionBody<'a> {
    author_id: i64,
    title: &'a str,
    text: &'a str,
    image: &'a str,
    tags: &'a str,
}

fn normalize_all(questions: Vec<Question>) -> Vec<Question> {
    questions.into_iter().map(Question::normalize).collect()
}

impl ApiClient {
    /// GET `/questions/all`
    pub async fn all_questions(&self) -> Result<Vec<Question>, ApiError> {
        Ok(normalize_all(self.get_json("/questions/all").await?))
    }

    /// GET `/questions/find/:id`
    pub async fn question_by_id(&self, id: &str) -> Result<Question, ApiError> {
        let id = require_id("question ID", id)?;
        let question: Question = self.get_json(&format!("/questions/find/{id}")).await?;
        Ok(question.normalize())
    }

    /// GET `/questions/author/:id`
    pub async fn questions_by_author(&self, author_id: &str) -> Result<Vec<Question>, ApiError> {
        let author_id = require_id("author ID", author_id)?;
        Ok(normalize_all(
            self.get_json(&format!("/questions/author/{author_id}")).await?,
        ))
    }

    /// GET `/questions/tag/:tag`
    pub async fn questions_by_tag(&self, tag_name: &str) -> Result<Vec<Question>, ApiError> {
        let tag_name = require_id("tag name", tag_name)?;
        Ok(normalize_all(
            self.get_json(&format!("/questions/tag/{tag_name}")).await?,
        ))
    }

    /// GET `/questions/status/:status`
    pub async fn questions_by_status(&self, status: &str) -> Result<Vec<Question>, ApiError> {
        let status = require_id("status", status)?;
        Ok(normalize_all(
            self.get_json(&format!("/questions/status/{status}")).await?,
        ))
    }

    /// GET `/questions/search?keyword=`
    pub async fn search_questions(&self, keyword: &str) -> Result<Vec<Question>, ApiError> {
        let keyword = require_keyword(keyword)?;
        Ok(normalize_all(
            self.get_query("/questions/search", &[("keyword", keyword)])
                .await?,
        ))
    }

    /// POST `/questions/create`. Title and text are required; tags are a
    /// comma-joined string, matching the backend's write shape.
    pub async fn create_question(
        &self,
        author_id: i64,
        title: &str,
        text: &str,
        image: &str,
        tags: &str,
    ) -> Result<Question, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::InvalidArgument("Title is required".to_string()));
        }
        if text.trim().is_empty() {
            return Err(ApiError::InvalidArgument(
                "Question text is required".to_string(),
            ));
        }
        let body = NewQuestionBody {
            author_id,
            title,
            text,
            image,
            tags,
        };
        let question: Question = self.post_json("/questions/create", &body).await?;
        Ok(question.normalize())
    }

    /// PUT `/questions/update/:id?userId=`
    pub async fn update_question(
        &self,
        id: i64,
        edit: &QuestionEdit,
        user_id: i64,
    ) -> Result<Question, ApiError> {
        let question: Question = self
            .put_json(&format!("/questions/update/{id}?userId={user_id}"), edit)
            .await?;
        Ok(question.normalize())
    }

    /// DELETE `/questions/delete/:id?userId=`
    pub async fn delete_question(&self, id: i64, user_id: i64) -> Result<(), ApiError> {
        let user_id = user_id.to_string();
        self.delete_ok(
            &format!("/questions/delete/{id}"),
            &[("userId", user_id.as_str())],
        )
        .await
    }

    /// PUT `/questions/:id/accept/:answerId`
    pub async fn accept_answer(&self, question_id: i64, answer_id: i64) -> Result<(), ApiError> {
        self.put_ok(&format!("/questions/{question_id}/accept/{answer_id}"))
            .await
    }
}
