//! Exchange metadata models: the published symbol list.

use serde::{Deserialize, Serialize};

/// Exchange information: the symbols available for trading.
///
/// Only the fields this client consumes are decoded; the exchange returns
/// considerably more (rate limits, filters, server time).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// Published symbol list
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInfo {
    /// Look up a symbol case-insensitively.
    pub fn find(&self, symbol: &str) -> Option<&SymbolInfo> {
        let wanted = symbol.trim().to_uppercase();
        self.symbols.iter().find(|s| s.symbol == wanted)
    }
}

/// Metadata for a single tradable symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Symbol name (e.g., "BTCUSDT")
    pub symbol: String,
    /// Trading status (e.g., "TRADING")
    #[serde(default)]
    pub status: Option<String>,
    /// Base asset (e.g., "BTC")
    #[serde(default)]
    pub base_asset: Option<String>,
    /// Quote asset (e.g., "USDT")
    #[serde(default)]
    pub quote_asset: Option<String>,
    /// Decimal places for prices
    #[serde(default)]
    pub price_precision: Option<u32>,
    /// Decimal places for quantities
    #[serde(default)]
    pub quantity_precision: Option<u32>,
}
