//! High-level client — `ArrayClient` with nested sub-client accessors.
//!
//! Each endpoint group has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::user::client::Users;
use crate::domain::wallet::client::Wallet;
use crate::http::ArrayHttp;
use crate::network::DEFAULT_API_URL;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::user::client::Users as UsersClient;
pub use crate::domain::wallet::client::Wallet as WalletClient;

/// The primary entry point for the Array SDK.
///
/// Provides nested sub-client accessors for each endpoint group:
/// `client.markets()`, `client.wallet()`, `client.user()`. The client holds
/// no mutable state — concurrent calls share only the immutable base URL, so
/// clones and simultaneous requests are always safe.
#[derive(Clone)]
pub struct ArrayClient {
    pub(crate) http: ArrayHttp,
}

impl ArrayClient {
    /// Create a client against the default base URL
    /// ([`DEFAULT_API_URL`](crate::network::DEFAULT_API_URL)).
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ArrayClientBuilder {
        ArrayClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet { client: self }
    }

    pub fn user(&self) -> Users<'_> {
        Users { client: self }
    }

    /// The low-level HTTP client, for raw access to the shared request path.
    pub fn http(&self) -> &ArrayHttp {
        &self.http
    }
}

impl Default for ArrayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ArrayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayClient")
            .field("base_url", &self.http.base_url())
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ArrayClientBuilder {
    base_url: String,
}

impl Default for ArrayClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ArrayClientBuilder {
    /// Override the base URL. Stored as given; no validation is performed.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn build(self) -> ArrayClient {
        ArrayClient {
            http: ArrayHttp::new(&self.base_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let client = ArrayClient::new();
        assert_eq!(client.http().base_url(), "http://localhost:3001");
    }

    #[test]
    fn test_builder_overrides_base_url() {
        let client = ArrayClient::builder()
            .base_url("http://127.0.0.1:9999")
            .build();
        assert_eq!(client.http().base_url(), "http://127.0.0.1:9999");
    }
}
