//! Market domain — current and historical market data.

pub mod client;
pub mod wire;

pub use wire::MarketData;
