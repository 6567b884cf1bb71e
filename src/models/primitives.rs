//! Primitive types and newtypes for type-safe API interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A futures trading symbol (e.g., "BTCUSDT").
///
/// Symbols are upper-cased and trimmed at construction so that lookups
/// against the exchange's published symbol list are a plain equality check.
///
/// # Example
///
/// ```
/// use binance_futures_cli::Symbol;
///
/// let symbol = Symbol::new("btcusdt");
/// assert_eq!(symbol.as_str(), "BTCUSDT");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new symbol, upper-casing the input.
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().trim().to_uppercase())
    }

    /// Get the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A strongly-typed exchange order ID.
///
/// Binance futures order IDs are numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    /// Create a new order ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Environment configuration for the futures API.
///
/// Determines which base URL to use - testnet or production.
///
/// # Example
///
/// ```
/// use binance_futures_cli::Environment;
///
/// let env = Environment::Testnet;
/// println!("API URL: {}", env.api_base_url());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Futures testnet - sandboxed environment with fake funds.
    #[default]
    Testnet,
    /// Production environment - real trading with real money.
    Production,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Testnet => "https://testnet.binancefuture.com",
            Environment::Production => "https://fapi.binance.com",
        }
    }

    /// Returns `true` if this is the testnet environment.
    pub fn is_testnet(&self) -> bool {
        matches!(self, Environment::Testnet)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Testnet => write!(f, "testnet"),
            Environment::Production => write!(f, "production"),
        }
    }
}
