//! Market data snapshot models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::Symbol;

/// Latest price for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerPrice {
    /// Trading symbol
    pub symbol: Symbol,
    /// Last traded price
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ticker_deserialization() {
        let ticker: TickerPrice =
            serde_json::from_str(r#"{"symbol": "BTCUSDT", "price": "65000.5"}"#).unwrap();
        assert_eq!(ticker.symbol.as_str(), "BTCUSDT");
        assert_eq!(ticker.price, dec!(65000.5));
        assert_eq!(ticker.price.to_string(), "65000.5");
    }
}
