//! Market data service: connectivity, prices, and symbol metadata.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use crate::client::ClientInner;
use crate::models::{ExchangeInfo, Symbol, SymbolInfo, TickerPrice};
use crate::{Error, Result};

/// Service for market data and exchange metadata.
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Connectivity check against the exchange.
    pub async fn ping(&self) -> Result<()> {
        let _: Value = self.inner.get_public("/fapi/v1/ping", &[]).await?;
        Ok(())
    }

    /// Get the current price for a symbol.
    pub async fn price(&self, symbol: impl Into<Symbol>) -> Result<Decimal> {
        let symbol = symbol.into();
        let ticker: TickerPrice = self
            .inner
            .get_public(
                "/fapi/v1/ticker/price",
                &[("symbol", symbol.to_string())],
            )
            .await?;

        info!(symbol = %ticker.symbol, price = %ticker.price, "current price");
        Ok(ticker.price)
    }

    /// Fetch the exchange's published symbol list.
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        self.inner.get_public("/fapi/v1/exchangeInfo", &[]).await
    }

    /// Resolve a symbol against the published list (case-insensitive).
    ///
    /// Fails with [`Error::InvalidSymbol`] if the symbol is not listed.
    pub async fn symbol_info(&self, symbol: impl Into<Symbol>) -> Result<SymbolInfo> {
        let symbol = symbol.into();
        let exchange_info = self.exchange_info().await?;

        match exchange_info.find(symbol.as_str()) {
            Some(found) => {
                info!(symbol = %found.symbol, "symbol found and active");
                Ok(found.clone())
            }
            None => Err(Error::InvalidSymbol(symbol.to_string())),
        }
    }
}
