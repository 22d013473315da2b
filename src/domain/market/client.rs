//! Markets sub-client — current and historical market queries.

use crate::client::ArrayClient;
use crate::domain::market::wire::MarketData;
use crate::error::SdkError;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a ArrayClient,
}

impl<'a> Markets<'a> {
    /// Get current market data for all listed assets.
    pub async fn current(&self) -> Result<Vec<MarketData>, SdkError> {
        Ok(self.client.http.get("/current_markets").await?)
    }

    /// Get historical market records.
    ///
    /// The backend returns heterogeneous rows here, so they stay untyped.
    pub async fn historical(&self) -> Result<Vec<serde_json::Value>, SdkError> {
        Ok(self.client.http.get("/historical_markets").await?)
    }
}
