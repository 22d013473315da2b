//! Network URL constants for the Array SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";
