//! User resource calls (`/users/...`).
//!
//! Every identity payload is normalized on the way out so the dual
//! `id`/`userId` naming never leaks past the gateway.

use serde::Serialize;

use crate::client::ApiClient;
use crate::models::{Identity, NewUser};
use crate::validate::{require_id, require_keyword};
use crate::ApiError;

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// POST `/users/login` — boolean credential check. A structured 403
    /// (banned account) surfaces as [`ApiError::Denied`].
    pub async fn check_login(&self, username: &str, password: &str) -> Result<bool, ApiError> {
        self.post_json_or_denied("/users/login", &LoginBody { username, password })
            .await
    }

    /// POST `/users/create` — register a new account.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<Identity, ApiError> {
        let identity: Identity = self.post_json("/users/create", new_user).await?;
        Ok(identity.normalize())
    }

    /// GET `/users/id/:id`
    pub async fn user_by_id(&self, id: &str) -> Result<Identity, ApiError> {
        let id = require_id("user ID", id)?;
        let identity: Identity = self.get_json(&format!("/users/id/{id}")).await?;
        Ok(identity.normalize())
    }

    /// GET `/users/username/:username`
    pub async fn user_by_username(&self, username: &str) -> Result<Identity, ApiError> {
        let username = require_id("username", username)?;
        let identity: Identity = self.get_json(&format!("/users/username/{username}")).await?;
        Ok(identity.normalize())
    }

    /// GET `/users/all`
    pub async fn all_users(&self) -> Result<Vec<Identity>, ApiError> {
        let users: Vec<Identity> = self.get_json("/users/all").await?;
        Ok(users.into_iter().map(Identity::normalize).collect())
    }

    /// PUT `/users/:id` — full-replace profile update.
    pub async fn update_user(&self, id: &str, profile: &Identity) -> Result<Identity, ApiError> {
        let id = require_id("user ID", id)?;
        let identity: Identity = self.put_json(&format!("/users/{id}"), profile).await?;
        Ok(identity.normalize())
    }

    /// GET `/users/search?keyword=` — keyword is percent-encoded by the
    /// query builder.
    pub async fn search_users(&self, keyword: &str) -> Result<Vec<Identity>, ApiError> {
        let keyword = require_keyword(keyword)?;
        let users: Vec<Identity> = self
            .get_query("/users/search", &[("keyword", keyword)])
            .await?;
        Ok(users.into_iter().map(Identity::normalize).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::{ApiClient, ApiConfig};
    use crate::ApiError;

    fn unroutable() -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
        })
    }

    #[tokio::test]
    async fn test_user_lookup_rejects_sentinel_ids_before_any_request() {
        let api = unroutable();
        for bad in ["undefined", "null", "", "  "] {
            let err = api.user_by_id(bad).await.unwrap_err();
            assert!(matches!(err, ApiError::InvalidArgument(_)));
        }
    }

    #[tokio::test]
    async fn test_search_users_rejects_blank_keyword() {
        let err = unroutable().search_users("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }
}
