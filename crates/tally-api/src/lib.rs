//! # tally-api
//!
//! HTTP client for the Tally REST API.
//!
//! One [`ApiClient`] covers every resource; each resource module adds its
//! calls as inherent methods:
//! - [`auth`]: login and current-user lookup
//! - [`brands`], [`projects`], [`tasks`]: the brand → project → task hierarchy
//! - [`users`], [`permissions`]: user administration and project grants
//! - [`time_entries`]: time logging

pub mod auth;
pub mod brands;
pub mod permissions;
pub mod projects;
pub mod tasks;
pub mod time_entries;
pub mod users;

mod error;
mod http;

pub use error::ApiError;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tally_config::ApiConfig;

use crate::http::check_response;

/// Authenticated (or anonymous) client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration. No token is attached yet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. TLS backend initialisation).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            token: None,
        })
    }

    /// Attach a bearer token to every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = check_response(self.request(reqwest::Method::GET, path).send().await?).await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = check_response(
            self.request(reqwest::Method::POST, path)
                .json(body)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = check_response(
            self.request(reqwest::Method::PUT, path)
                .json(body)
                .send()
                .await?,
        )
        .await?;
        Ok(resp.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        check_response(self.request(reqwest::Method::DELETE, path).send().await?).await?;
        Ok(())
    }
}

/// Encode a resource id for use as a path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Append `?key=value&...` for every present filter.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<&str>)]) -> String {
    let query = params
        .iter()
        .filter_map(|(key, value)| value.map(|value| format!("{key}={}", urlencoding::encode(value))))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
