//! Wallet sub-client — balances, positions, and obligations by pubkey.

use crate::client::ArrayClient;
use crate::domain::require_param;
use crate::domain::wallet::wire::WalletData;
use crate::error::SdkError;

/// Sub-client for wallet operations.
pub struct Wallet<'a> {
    pub(crate) client: &'a ArrayClient,
}

impl<'a> Wallet<'a> {
    /// Get balances and positions for a wallet.
    pub async fn data(&self, pubkey: &str) -> Result<WalletData, SdkError> {
        require_param(pubkey, "Public key is required")?;
        let endpoint = format!("/wallet/{}", urlencoding::encode(pubkey));
        Ok(self.client.http.get(&endpoint).await?)
    }

    /// Get outstanding obligations for a wallet.
    ///
    /// The backend returns heterogeneous records here, so they stay untyped.
    pub async fn obligations(&self, pubkey: &str) -> Result<Vec<serde_json::Value>, SdkError> {
        require_param(pubkey, "Public key is required")?;
        let endpoint = format!("/user_obligations/{}", urlencoding::encode(pubkey));
        Ok(self.client.http.get(&endpoint).await?)
    }
}
