//! Enumeration types for the futures API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy / long
    Buy,
    /// Sell / short
    Sell,
}

impl Side {
    /// Wire representation ("BUY" / "SELL").
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = Error;

    /// Parse a side case-insensitively. Anything other than BUY or SELL
    /// is a validation error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(Error::InvalidInput(format!(
                "Side must be BUY or SELL, got '{}'",
                other
            ))),
        }
    }
}

/// Order type specifying how the order should be executed.
///
/// The futures API names stop-limit orders `STOP`: the order becomes a
/// limit order once the stop price is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Market order - execute immediately at current market price
    #[serde(rename = "MARKET")]
    Market,
    /// Limit order - execute at specified price or better
    #[serde(rename = "LIMIT")]
    Limit,
    /// Stop-limit order - becomes a limit order when the stop price is hit
    #[serde(rename = "STOP")]
    StopLimit,
    /// Any other exchange order type (stop-market, take-profit, ...)
    #[serde(other)]
    Other,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::StopLimit => write!(f, "STOP"),
            OrderType::Other => write!(f, "OTHER"),
        }
    }
}

/// Time in force specification for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInForce {
    /// Good till cancelled - remains active until filled or cancelled
    #[serde(rename = "GTC")]
    #[default]
    Gtc,
    /// Immediate or cancel - fill what is possible, cancel the rest
    #[serde(rename = "IOC")]
    Ioc,
    /// Fill or kill - fill completely or cancel
    #[serde(rename = "FOK")]
    Fok,
    /// Good till crossing - post-only
    #[serde(rename = "GTX")]
    Gtx,
}

impl TimeInForce {
    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current status of an order as reported by the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order accepted and working
    New,
    /// Order partially filled
    PartiallyFilled,
    /// Order completely filled
    Filled,
    /// Order cancelled
    Canceled,
    /// Order rejected by the exchange
    Rejected,
    /// Order expired
    Expired,
    /// Unknown status (forward-compatibility)
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Filled
                | OrderStatus::Canceled
                | OrderStatus::Rejected
                | OrderStatus::Expired
        )
    }

    /// Returns `true` if the order is still working.
    pub fn is_working(&self) -> bool {
        matches!(self, OrderStatus::New | OrderStatus::PartiallyFilled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::New => "NEW",
            OrderStatus::PartiallyFilled => "PARTIALLY_FILLED",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Expired => "EXPIRED",
            OrderStatus::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_parse_case_insensitive() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!(" Sell ".parse::<Side>().unwrap(), Side::Sell);

        let err = "hold".parse::<Side>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::StopLimit).unwrap(),
            "\"STOP\""
        );
        let parsed: OrderType = serde_json::from_str("\"MARKET\"").unwrap();
        assert_eq!(parsed, OrderType::Market);
        // Unrecognized exchange types must not break deserialization
        let parsed: OrderType = serde_json::from_str("\"TRAILING_STOP_MARKET\"").unwrap();
        assert_eq!(parsed, OrderType::Other);
    }

    #[test]
    fn test_time_in_force_default() {
        assert_eq!(TimeInForce::default(), TimeInForce::Gtc);
        assert_eq!(serde_json::to_string(&TimeInForce::Gtc).unwrap(), "\"GTC\"");
    }

    #[test]
    fn test_order_status_terminal() {
        assert!(OrderStatus::Filled.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
        assert!(OrderStatus::PartiallyFilled.is_working());
    }

    #[test]
    fn test_order_status_wire_names() {
        let parsed: OrderStatus = serde_json::from_str("\"PARTIALLY_FILLED\"").unwrap();
        assert_eq!(parsed, OrderStatus::PartiallyFilled);
    }
}
