//! The futures client: session construction and service access.

mod config;
mod http;
mod sign;

pub use config::{ClientConfig, Credentials};
pub(crate) use http::ClientInner;

use std::sync::Arc;

use tracing::info;

use crate::api::{AccountService, MarketDataService, OrdersService};
use crate::models::Environment;
use crate::{Error, Result};

/// The main client for the futures API.
///
/// Access to the individual endpoint groups goes through service getters,
/// each sharing the same underlying HTTP client and credentials.
///
/// # Example
///
/// ```no_run
/// use binance_futures_cli::{ClientConfig, Credentials, FuturesClient};
///
/// # async fn example() -> binance_futures_cli::Result<()> {
/// let client = FuturesClient::connect(
///     Credentials::new("api-key", "api-secret"),
///     ClientConfig::default(),
/// )
/// .await?;
///
/// let balance = client.account().balance().await?;
/// println!("Total: {} USDT", balance.total_balance);
/// # Ok(())
/// # }
/// ```
pub struct FuturesClient {
    pub(crate) inner: Arc<ClientInner>,
}

impl FuturesClient {
    /// Build a client without contacting the exchange.
    ///
    /// Useful when the first real call should be the one that surfaces
    /// connectivity problems; [`connect`](Self::connect) validates the
    /// session eagerly instead.
    pub fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                credentials,
                config,
            }),
        })
    }

    /// Build a client and validate the session.
    ///
    /// Pings the exchange and fetches the futures account, logging the
    /// wallet balance. Fails with [`Error::Connection`] if the exchange is
    /// unreachable or the credentials are rejected.
    pub async fn connect(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let client = Self::new(credentials, config)?;
        client.validate_connection().await?;
        Ok(client)
    }

    async fn validate_connection(&self) -> Result<()> {
        self.market_data()
            .ping()
            .await
            .map_err(|e| Error::Connection(format!("exchange unreachable: {}", e)))?;

        let account = self
            .account()
            .account()
            .await
            .map_err(|e| Error::Connection(format!("account access failed: {}", e)))?;

        info!(
            environment = %self.environment(),
            balance = %account.total_wallet_balance,
            "connected to futures API"
        );
        Ok(())
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the market data service.
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// The environment this client targets.
    pub fn environment(&self) -> Environment {
        self.inner.config.environment
    }
}

impl Clone for FuturesClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FuturesClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
