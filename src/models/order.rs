//! Order models for placing and inspecting trades.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrderStatus, OrderType, Side, TimeInForce};
use super::primitives::{OrderId, Symbol};
use crate::{Error, Result};

/// A new order to be submitted to the exchange.
///
/// Use the [`market`](OrderRequest::market), [`limit`](OrderRequest::limit),
/// and [`stop_limit`](OrderRequest::stop_limit) constructors; they fill in
/// the kind-specific fields and leave the rest unset.
///
/// # Example
///
/// ```
/// use binance_futures_cli::models::{OrderRequest, Side};
/// use rust_decimal::Decimal;
///
/// let req = OrderRequest::market("btcusdt", Side::Buy, Decimal::new(1, 2));
/// assert!(req.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading symbol, upper-cased
    pub symbol: Symbol,
    /// Order side
    pub side: Side,
    /// Order quantity (base asset)
    pub quantity: Decimal,
    /// Order kind
    pub order_type: OrderType,
    /// Limit price (LIMIT, STOP_LIMIT)
    pub price: Option<Decimal>,
    /// Stop trigger price (STOP_LIMIT)
    pub stop_price: Option<Decimal>,
    /// Time in force (LIMIT, STOP_LIMIT; not sent for MARKET)
    pub time_in_force: TimeInForce,
}

impl OrderRequest {
    /// A market order: symbol, side, and quantity only.
    pub fn market(symbol: impl Into<Symbol>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            order_type: OrderType::Market,
            price: None,
            stop_price: None,
            time_in_force: TimeInForce::default(),
        }
    }

    /// A limit order at `price`, GTC unless changed with
    /// [`with_time_in_force`](Self::with_time_in_force).
    pub fn limit(symbol: impl Into<Symbol>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            order_type: OrderType::Limit,
            price: Some(price),
            stop_price: None,
            time_in_force: TimeInForce::default(),
        }
    }

    /// A stop-limit order: a limit order at `price` armed once `stop_price`
    /// is reached.
    pub fn stop_limit(
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            order_type: OrderType::StopLimit,
            price: Some(price),
            stop_price: Some(stop_price),
            time_in_force: TimeInForce::default(),
        }
    }

    /// Override the time in force.
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = tif;
        self
    }

    /// Validate the request fields.
    ///
    /// Runs before any network call: a failed validation means the
    /// exchange was never contacted.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.as_str().is_empty() {
            return Err(Error::InvalidInput("Symbol must not be empty".to_string()));
        }

        if self.quantity <= Decimal::ZERO {
            return Err(Error::InvalidInput(format!(
                "Quantity must be positive, got {}",
                self.quantity
            )));
        }

        match self.order_type {
            OrderType::Market => {}
            OrderType::Limit => {
                require_positive(self.price, "Limit orders require a positive price")?;
            }
            OrderType::StopLimit => {
                require_positive(self.price, "Stop-limit orders require a positive price")?;
                require_positive(
                    self.stop_price,
                    "Stop-limit orders require a positive stop price",
                )?;
            }
            OrderType::Other => {
                return Err(Error::InvalidInput("Unsupported order type".to_string()));
            }
        }

        Ok(())
    }

    /// Encode the kind-specific parameter set for the order endpoint.
    ///
    /// Market orders omit `timeInForce`; the exchange applies its own
    /// default (matching the upstream SDK behavior this client replaces).
    pub(crate) fn wire_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.to_string()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
            ("quantity", self.quantity.to_string()),
        ];

        match self.order_type {
            OrderType::Market | OrderType::Other => {}
            OrderType::Limit => {
                if let Some(price) = self.price {
                    params.push(("price", price.to_string()));
                }
                params.push(("timeInForce", self.time_in_force.to_string()));
            }
            OrderType::StopLimit => {
                if let Some(price) = self.price {
                    params.push(("price", price.to_string()));
                }
                if let Some(stop) = self.stop_price {
                    params.push(("stopPrice", stop.to_string()));
                }
                params.push(("timeInForce", self.time_in_force.to_string()));
            }
        }

        params
    }
}

fn require_positive(value: Option<Decimal>, message: &str) -> Result<()> {
    match value {
        Some(v) if v > Decimal::ZERO => Ok(()),
        _ => Err(Error::InvalidInput(message.to_string())),
    }
}

/// An order as reported by the exchange (placement response, status query,
/// open-orders listing, cancellation result).
///
/// Decoded once at the collaborator boundary and displayed; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    /// Exchange-assigned order ID
    pub order_id: OrderId,
    /// Trading symbol
    pub symbol: Symbol,
    /// Client-assigned order ID
    #[serde(default)]
    pub client_order_id: Option<String>,
    /// Order side
    pub side: Side,
    /// Order kind
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Current status
    pub status: OrderStatus,
    /// Original order quantity
    pub orig_qty: Decimal,
    /// Quantity executed so far
    #[serde(default)]
    pub executed_qty: Decimal,
    /// Limit price ("0" for market orders)
    #[serde(default)]
    pub price: Decimal,
    /// Stop trigger price, where applicable
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    /// Time in force, where applicable
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Last update time (epoch millis)
    #[serde(default)]
    pub update_time: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_order_valid() {
        let req = OrderRequest::market("btcusdt", Side::Buy, dec!(0.01));
        assert!(req.validate().is_ok());
        assert_eq!(req.symbol.as_str(), "BTCUSDT");
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let req = OrderRequest::market("BTCUSDT", Side::Buy, dec!(0));
        let err = req.validate().unwrap_err();
        assert!(err.is_validation());

        let req = OrderRequest::market("BTCUSDT", Side::Sell, dec!(-1));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_limit_order_requires_positive_price() {
        let req = OrderRequest::limit("ETHUSDT", Side::Buy, dec!(1), dec!(0));
        assert!(req.validate().unwrap_err().is_validation());

        let req = OrderRequest::limit("ETHUSDT", Side::Buy, dec!(1), dec!(2500.50));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_stop_limit_requires_both_prices() {
        let req = OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec!(1), dec!(60000), dec!(0));
        assert!(req.validate().unwrap_err().is_validation());

        let req =
            OrderRequest::stop_limit("BTCUSDT", Side::Sell, dec!(1), dec!(60000), dec!(60500));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_market_params_omit_time_in_force() {
        let req = OrderRequest::market("BTCUSDT", Side::Buy, dec!(0.5));
        let params = req.wire_params();
        assert!(params.iter().all(|(k, _)| *k != "timeInForce"));
        assert!(params.contains(&("type", "MARKET".to_string())));
    }

    #[test]
    fn test_stop_limit_params() {
        let req = OrderRequest::stop_limit("BTCUSDT", Side::Buy, dec!(1), dec!(61000), dec!(60500));
        let params = req.wire_params();
        assert!(params.contains(&("type", "STOP".to_string())));
        assert!(params.contains(&("price", "61000".to_string())));
        assert!(params.contains(&("stopPrice", "60500".to_string())));
        assert!(params.contains(&("timeInForce", "GTC".to_string())));
    }

    #[test]
    fn test_order_result_deserialization() {
        let json = r#"{
            "orderId": 4061549612,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-abc123",
            "price": "61000",
            "origQty": "0.010",
            "executedQty": "0",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "stopPrice": "0",
            "updateTime": 1710000000000
        }"#;

        let order: OrderResult = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id.value(), 4061549612);
        assert_eq!(order.side, Side::Buy);
        assert_eq!(order.order_type, OrderType::Limit);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.orig_qty, dec!(0.010));
        assert_eq!(order.price, dec!(61000));
    }
}
