//! Thin reqwest wrapper: URL assembly, JSON decoding, error mapping.

use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::ApiError;

/// Backend origin used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings for the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST backend, without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for the Q&A backend. Cheap to clone; carries no state
/// beyond the connection pool and the configured origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// POST with query parameters and an empty body (the backend's
    /// `direct-create` style endpoints).
    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::decode(resp).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .put(self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// DELETE where the response body is irrelevant; only the status is
    /// checked.
    pub(crate) async fn delete_ok(&self, path: &str, query: &[(&str, &str)]) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(path))
            .query(query)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::discard(resp).await
    }

    /// PUT with no body where only the status matters (accept-answer).
    pub(crate) async fn put_ok(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(path))
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        Self::discard(resp).await
    }

    /// POST a JSON body where only the status matters (votes).
    pub(crate) async fn post_ok<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::discard(resp).await
    }

    /// Variant of [`Self::post_json`] that maps a 403 into the structured
    /// [`ApiError::Denied`]. Only the login check produces that shape.
    pub(crate) async fn post_json_or_denied<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        if resp.status() == StatusCode::FORBIDDEN {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::denied(&body));
        }
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn discard(resp: Response) -> Result<(), ApiError> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}
