//! Wire types for wallet responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// REST response for wallet data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletData {
    pub wallet_balances: Vec<WalletBalance>,
    pub wallet_positions: Vec<WalletPosition>,
}

/// A token balance held in the wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletBalance {
    pub symbol: String,
    pub amount: TokenAmount,
}

/// A lending position from the REST API.
///
/// Amounts come over the wire as decimal strings to avoid precision loss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletPosition {
    pub id: String,
    pub borrowed_amount: Decimal,
    pub collateral_amount: Decimal,
}

/// A raw token amount as the backend sends it: a `[raw, decimals]` pair.
///
/// The pair carries exactly two numeric components. A payload with any other
/// arity is a malformed-response decode error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    pub raw: u64,
    pub decimals: u32,
}

impl TokenAmount {
    pub fn new(raw: u64, decimals: u32) -> Self {
        Self { raw, decimals }
    }

    /// Scale the raw amount into a decimal value.
    ///
    /// `None` when the exponent exceeds what `Decimal` can represent
    /// (scale > 28).
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::try_from_i128_with_scale(self.raw as i128, self.decimals).ok()
    }
}

impl Serialize for TokenAmount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.raw, self.decimals).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (raw, decimals) = <(u64, u32)>::deserialize(deserializer)?;
        Ok(Self { raw, decimals })
    }
}
