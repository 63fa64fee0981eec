//! Typed REST clients for the project admin API.
//!
//! One client per resource (`projects`, `competitors`, `service-areas`,
//! `notes`), all sharing an [`ApiClient`] built from [`ApiConfig`]. The
//! clients do exactly one HTTP call per operation: no retries, no explicit
//! timeouts, no pagination handling. Failures surface as [`ApiError`]
//! unmodified.

use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub mod competitors;
pub mod notes;
pub mod projects;
pub mod service_areas;

const BASE_URL_ENV: &str = "BENCHTRACK_API_BASE_URL";

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("json error: {0}")]
    Serde(String),
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("missing base url: BENCHTRACK_API_BASE_URL environment variable not set")]
    MissingBaseUrl,
}

/// Where the remote API lives. Read from the environment in deployments,
/// constructed directly in tests.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let raw = base_url.into();
        Url::parse(&raw).map_err(|e| ApiError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        let raw = std::env::var(BASE_URL_ENV).map_err(|_| ApiError::MissingBaseUrl)?;
        Self::new(raw)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Shared HTTP plumbing for the resource clients. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("benchtrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base: config.base_url,
        })
    }

    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ApiConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let res = self
            .http
            .get(self.url(path))
            .query(params)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = self
            .http
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        decode(res).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let res = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(map_reqwest_error)?;
        expect_success(res).await.map(|_| ())
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let res = expect_success(res).await?;
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Serde(e.to_string()))
}

async fn expect_success(res: Response) -> Result<Response, ApiError> {
    match res.status() {
        s if s.is_success() => Ok(res),
        s => {
            let status = s.as_u16();
            let body = res.text().await.unwrap_or_default();
            debug!(status, "request rejected by the server");
            Err(ApiError::Http { status, body })
        }
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_strips_trailing_slash() {
        let config = ApiConfig::new("http://localhost:4000/api/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:4000/api");
    }

    #[test]
    fn config_rejects_garbage() {
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ApiError::InvalidBaseUrl { .. })
        ));
    }
}
