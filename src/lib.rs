//! # Array SDK
//!
//! A Rust client for the Array lending backend REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Wire types, domain slices, error types
//! 2. **HTTP** — `ArrayHttp`: the single shared request path (URL
//!    construction, JSON headers, error-body parsing, response decoding)
//! 3. **High-Level Client** — `ArrayClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use array_sdk::prelude::*;
//!
//! let client = ArrayClient::new();
//!
//! let markets = client.markets().current().await?;
//! let wallet = client.wallet().data("8y9wxTgm4G8gJ1RZr4fQ5eGXtb5vMNXVpd2nGKVTJSYL").await?;
//! ```
//!
//! Every call is a single request/response round trip: the client keeps no
//! state beyond its base URL, imposes no timeout, and performs no retries.
//! Errors propagate to the caller unmodified.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): wire types and sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Low-level HTTP client.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `ArrayClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — markets
    pub use crate::domain::market::MarketData;

    // Domain types — wallet
    pub use crate::domain::wallet::{TokenAmount, WalletBalance, WalletData, WalletPosition};

    // Domain types — user
    pub use crate::domain::user::{
        ApiResponse, CreateUserRequest, UpdateUserRequest, UserProfile,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{
        ArrayClient, ArrayClientBuilder, MarketsClient, UsersClient, WalletClient,
    };
    pub use crate::http::ArrayHttp;
}
