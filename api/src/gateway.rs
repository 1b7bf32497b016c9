//! # Gateway seams
//!
//! The aggregator and the session service do not talk to [`ApiClient`]
//! directly; they depend on the small traits below, which the client
//! implements by delegating to its inherent methods. Tests substitute
//! stub implementations, the same way the session slot is substituted by
//! an in-memory store.

use crate::client::ApiClient;
use crate::models::{Answer, Identity, NewUser, Question};
use crate::ApiError;

/// Read access to a user and their authored content.
pub trait AuthorContent {
    async fn user_by_id(&self, id: &str) -> Result<Identity, ApiError>;
    async fn questions_by_author(&self, author_id: &str) -> Result<Vec<Question>, ApiError>;
    async fn answers_by_author(&self, author_id: &str) -> Result<Vec<Answer>, ApiError>;
}

/// Keyword search over questions and users.
pub trait SearchIndex {
    async fn search_questions(&self, keyword: &str) -> Result<Vec<Question>, ApiError>;
    async fn search_users(&self, keyword: &str) -> Result<Vec<Identity>, ApiError>;
}

/// The calls the session service needs to authenticate an account.
pub trait Credentials {
    async fn check_login(&self, username: &str, password: &str) -> Result<bool, ApiError>;
    async fn user_by_username(&self, username: &str) -> Result<Identity, ApiError>;
    async fn create_user(&self, new_user: &NewUser) -> Result<Identity, ApiError>;
}

impl AuthorContent for ApiClient {
    async fn user_by_id(&self, id: &str) -> Result<Identity, ApiError> {
        ApiClient::user_by_id(self, id).await
    }

    async fn questions_by_author(&self, author_id: &str) -> Result<Vec<Question>, ApiError> {
        ApiClient::questions_by_author(self, author_id).await
    }

    async fn answers_by_author(&self, author_id: &str) -> Result<Vec<Answer>, ApiError> {
        ApiClient::answers_by_author(self, author_id).await
    }
}

impl SearchIndex for ApiClient {
    async fn search_questions(&self, keyword: &str) -> Result<Vec<Question>, ApiError> {
        ApiClient::search_questions(self, keyword).await
    }

    async fn search_users(&self, keyword: &str) -> Result<Vec<Identity>, ApiError> {
        ApiClient::search_users(self, keyword).await
    }
}

impl Credentials for ApiClient {
    async fn check_login(&self, username: &str, password: &str) -> Result<bool, ApiError> {
        ApiClient::check_login(self, username, password).await
    }

    async fn user_by_username(&self, username: &str) -> Result<Identity, ApiError> {
        ApiClient::user_by_username(self, username).await
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<Identity, ApiError> {
        ApiClient::create_user(self, new_user).await
    }
}
