use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, BackendMessage},
    config::RuntimeConfig,
};

/// Thin wrapper over the shop backend. Every path is relative to
/// `{BACKEND_URL}/api`.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &RuntimeConfig) -> Option<Self> {
        config.api_base_url().map(Self::new_with_base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(super) fn authorized(&self, builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header(header::AUTHORIZATION, format!("Bearer {}", token))
    }

    pub(super) async fn send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::read_error(response).await)
        }
    }

    pub(super) async fn read_error(response: Response) -> ApiError {
        let status = response.status();
        let message = response
            .json::<BackendMessage>()
            .await
            .map(BackendMessage::into_text)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        if status == reqwest::StatusCode::UNAUTHORIZED {
            log::warn!("backend rejected the session token");
        }
        ApiError::from_status(status.as_u16(), message)
    }
}
