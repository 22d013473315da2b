//! Wire types for market responses (REST).

use serde::{Deserialize, Serialize};

/// Current market snapshot for a single asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketData {
    pub symbol: String,
    pub price: f64,
    pub supply_apy: f64,
    pub borrow_apy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_data_deserialize() {
        let json = r#"{
            "symbol": "SOL",
            "price": 142.5,
            "supply_apy": 3.2,
            "borrow_apy": 5.8
        }"#;
        let market: MarketData = serde_json::from_str(json).unwrap();
        assert_eq!(market.symbol, "SOL");
        assert_eq!(market.price, 142.5);
        assert_eq!(market.supply_apy, 3.2);
        assert_eq!(market.borrow_apy, 5.8);
    }

    #[test]
    fn test_market_data_array_deserialize() {
        let json = r#"[
            {"symbol": "SOL", "price": 142.5, "supply_apy": 3.2, "borrow_apy": 5.8},
            {"symbol": "USDC", "price": 1.0, "supply_apy": 4.1, "borrow_apy": 6.3}
        ]"#;
        let markets: Vec<MarketData> = serde_json::from_str(json).unwrap();
        assert_eq!(markets.len(), 2);
        assert_eq!(markets[1].symbol, "USDC");
    }
}
