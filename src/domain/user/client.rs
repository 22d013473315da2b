//! Users sub-client — profile creation, lookup, and partial updates.

use crate::client::ArrayClient;
use crate::domain::require_param;
use crate::domain::user::wire::{ApiResponse, CreateUserRequest, UpdateUserRequest, UserProfile};
use crate::error::SdkError;

/// Sub-client for user-profile operations.
pub struct Users<'a> {
    pub(crate) client: &'a ArrayClient,
}

impl<'a> Users<'a> {
    /// Create a new user.
    pub async fn create(
        &self,
        user: &CreateUserRequest,
    ) -> Result<ApiResponse<UserProfile>, SdkError> {
        require_param(&user.wallet_address, "Wallet address is required")?;
        Ok(self.client.http.post("/user", user).await?)
    }

    /// Get a user profile by wallet address.
    pub async fn profile(&self, pubkey: &str) -> Result<ApiResponse<UserProfile>, SdkError> {
        require_param(pubkey, "Wallet address is required")?;
        let endpoint = format!("/user/{}", urlencoding::encode(pubkey));
        Ok(self.client.http.get(&endpoint).await?)
    }

    /// Partially update a user profile. Only the fields set in `changes`
    /// appear in the request body.
    pub async fn update(
        &self,
        pubkey: &str,
        changes: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserProfile>, SdkError> {
        require_param(pubkey, "Wallet address is required")?;
        let endpoint = format!("/user/{}", urlencoding::encode(pubkey));
        Ok(self.client.http.put(&endpoint, changes).await?)
    }
}
