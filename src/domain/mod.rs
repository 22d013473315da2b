//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — Raw serde structs matching backend request/response shapes
//! - `client.rs` — Sub-client with parameter validation and path templating
//!
//! Note the envelope asymmetry: user endpoints wrap responses in
//! `{success, data, error}` while market and wallet endpoints return raw
//! arrays/objects. This mirrors the backend exactly and is preserved for
//! compatibility.

pub mod market;
pub mod user;
pub mod wallet;

use crate::error::SdkError;
use tracing::warn;

/// Rejects an empty required identifier before any network I/O is attempted.
pub(crate) fn require_param(value: &str, message: &str) -> Result<(), SdkError> {
    if value.is_empty() {
        warn!(%message, "validation failed");
        return Err(SdkError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_param_rejects_empty() {
        let err = require_param("", "Public key is required").unwrap_err();
        assert!(matches!(err, SdkError::Validation(m) if m == "Public key is required"));
    }

    #[test]
    fn test_require_param_accepts_non_empty() {
        assert!(require_param("abc", "Public key is required").is_ok());
    }
}
