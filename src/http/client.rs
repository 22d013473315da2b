//! Low-level HTTP client — `ArrayHttp`.
//!
//! Every endpoint goes through the one [`request`](ArrayHttp::request) path:
//! URL construction, JSON header merging, error-body parsing, and response
//! decoding live here and nowhere else. The sub-clients in `domain/` are thin
//! parameter-validation and path-templating layers over this.

use crate::error::HttpError;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Error body the backend sends on non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Low-level HTTP client for the Array REST API.
///
/// Holds the base URL (immutable for the client's lifetime) and a shared
/// `reqwest::Client`. Stateless beyond that: no caches, no retries, no
/// client-imposed timeout.
#[derive(Clone)]
pub struct ArrayHttp {
    base_url: String,
    client: Client,
}

impl ArrayHttp {
    /// Create a client against the given base URL.
    ///
    /// The URL is stored as given — no normalization or validation. A
    /// malformed base URL surfaces as a transport error at request time.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::builder()
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, HttpError> {
        self.request(Method::GET, endpoint, None::<&()>, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, endpoint, Some(body), None).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::PUT, endpoint, Some(body), None).await
    }

    /// The shared request path.
    ///
    /// `endpoint` must begin with `/`; the URL is the base URL with the
    /// endpoint appended. Every request carries `Content-Type:
    /// application/json`; `extra_headers` are applied after the default and
    /// win on key collision.
    ///
    /// A success status decodes the body as JSON into `T`. A non-success
    /// status fails with [`HttpError::Api`] carrying the backend's `error`
    /// message, falling back to `HTTP error <status>` when the body is not
    /// JSON or carries no message. Transport and decode failures propagate
    /// as [`HttpError::Reqwest`]. Every failure is logged once with the
    /// endpoint name; successes are not logged.
    pub async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T, HttpError> {
        debug_assert!(endpoint.starts_with('/'), "endpoint must begin with '/'");
        let url = format!("{}{}", self.base_url, endpoint);

        // Default header goes on first: reqwest's `json()` only inserts
        // Content-Type when absent, so the wire request carries it exactly
        // once, and `headers()` replaces on collision for caller overrides.
        let mut req = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(b) = body {
            req = req.json(b);
        }
        if let Some(extra) = extra_headers {
            req = req.headers(extra);
        }

        let resp = req.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "API request failed");
            HttpError::from(e)
        })?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(|e| {
                warn!(endpoint, error = %e, "API response decoding failed");
                HttpError::from(e)
            });
        }

        let status = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body_text)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", status));

        warn!(endpoint, status, %message, "API request failed");
        Err(HttpError::Api { status, message })
    }
}

impl std::fmt::Debug for ArrayHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayHttp")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_stored_unmodified() {
        let http = ArrayHttp::new("http://localhost:3001/");
        assert_eq!(http.base_url(), "http://localhost:3001/");
    }

    #[test]
    fn test_error_body_parses_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "wallet not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("wallet not found"));
    }

    #[test]
    fn test_error_body_tolerates_missing_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert!(body.error.is_none());
    }
}
