//! Wire types for user endpoints (REST).

use serde::{Deserialize, Serialize};

/// Response envelope used by the user endpoints.
///
/// Returned to the caller as-is: whether `data` or `error` is populated is
/// the backend's contract, not the client's.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A user profile, keyed by wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub risk_level: String,
    pub created_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_logged_in: Option<String>,
}

/// Request body for creating a user.
///
/// `None` fields are omitted from the serialized body, not sent as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CreateUserRequest {
    pub wallet_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
}

/// Request body for a partial profile update. All fields are optional; only
/// the fields present in the body are touched server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_login_time: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_omits_none_fields() {
        let request = CreateUserRequest {
            wallet_address: "abc".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"wallet_address":"abc"}"#);
    }

    #[test]
    fn test_update_request_serializes_only_set_fields() {
        let request = UpdateUserRequest {
            risk_level: Some("high".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"risk_level":"high"}"#);
    }

    #[test]
    fn test_envelope_deserialize_success() {
        let json = r#"{
            "success": true,
            "data": {
                "wallet_address": "abc",
                "risk_level": "low",
                "created_date": "2025-01-15T10:30:00Z"
            }
        }"#;
        let response: ApiResponse<UserProfile> = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let profile = response.data.unwrap();
        assert_eq!(profile.wallet_address, "abc");
        assert!(profile.email.is_none());
        assert!(profile.last_logged_in.is_none());
        assert!(response.error.is_none());
    }

    #[test]
    fn test_envelope_deserialize_error() {
        let json = r#"{"success": false, "error": "user already exists"}"#;
        let response: ApiResponse<UserProfile> = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some("user already exists"));
    }
}
