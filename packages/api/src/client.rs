//! # Authenticated request gateway
//!
//! [`ApiClient`] turns relative endpoints into full backend URLs, sends JSON
//! requests, and injects the bearer token for authenticated calls. On
//! wasm32 `reqwest` compiles down to the browser `fetch` API, so the same
//! gateway runs in the browser and under the native test harness.
//!
//! Every response is handled the same way: 2xx bodies are decoded as JSON,
//! anything else becomes an [`ApiError::Request`] carrying the HTTP status
//! and the server's `error`/`message` text when the body provides one.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::api_base_url;
use crate::error::ApiError;

/// HTTP gateway to the TRIDENT backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint, namespaced under `/api`.
    ///
    /// Accepts `"/api/messages"`, `"/messages"` or `"messages"` and never
    /// double-prefixes. Pure, no I/O.
    pub fn api_url(&self, endpoint: &str) -> String {
        let normalized = if endpoint.starts_with("/api/") || endpoint == "/api" {
            endpoint.to_string()
        } else if endpoint.starts_with('/') {
            format!("/api{endpoint}")
        } else {
            format!("/api/{endpoint}")
        };
        format!("{}{normalized}", self.base_url)
    }

    /// Send a JSON request without authentication.
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(method, endpoint, body, None).await
    }

    /// Send a JSON request with a bearer token.
    ///
    /// Fails fast with [`ApiError::AuthRequired`] when no token is supplied;
    /// an unauthenticated request never leaves through this path.
    pub async fn request_json_with_auth<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::AuthRequired)?;
        self.send(method, endpoint, body, Some(token)).await
    }

    async fn send<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.api_url(endpoint);
        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("request to {url} failed with status {status}");
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status.as_u16(), &body));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// Build the error for a non-2xx response.
///
/// The backend reports failures as `{"error": "..."}"` or
/// `{"message": "..."}`; an empty or unparsable body falls back to a
/// generic status message.
pub(crate) fn error_from_response(status: u16, body: &str) -> ApiError {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.or(parsed.message))
        .unwrap_or_else(|| format!("API error: {status}"));

    ApiError::Request { status, message }
}
