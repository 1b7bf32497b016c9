//! Tag calls. The backend mounts these on the singular `/tag` path.

use serde::Serialize;

use crate::client::ApiClient;
use crate::models::Tag;
use crate::validate::require_id;
use crate::ApiError;

#[derive(Serialize)]
struct TagNameBody<'a> {
    name: &'a str,
}

impl ApiClient {
    /// GET `/tag/all`
    pub async fn all_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.get_json("/tag/all").await
    }

    /// GET `/tag/id/:id`
    pub async fn tag_by_id(&self, id: i64) -> Result<Tag, ApiError> {
        self.get_json(&format!("/tag/id/{id}")).await
    }

    /// GET `/tag/name/:name`
    pub async fn tag_by_name(&self, name: &str) -> Result<Tag, ApiError> {
        let name = require_id("tag name", name)?;
        self.get_json(&format!("/tag/name/{name}")).await
    }

    /// POST `/tag/create`
    pub async fn create_tag(&self, name: &str) -> Result<Tag, ApiError> {
        let name = require_id("tag name", name)?;
        self.post_json("/tag/create", &TagNameBody { name }).await
    }

    /// PUT `/tag/update/:id`
    pub async fn update_tag(&self, id: i64, name: &str) -> Result<Tag, ApiError> {
        let name = require_id("tag name", name)?;
        self.put_json(&format!("/tag/update/{id}"), &TagNameBody { name })
            .await
    }

    /// DELETE `/tag/delete/:id`
    pub async fn delete_tag(&self, id: i64) -> Result<(), ApiError> {
        self.delete_ok(&format!("/tag/delete/{id}"), &[]).await
    }
}
