//! Account service: balances and account state.

use std::sync::Arc;

use tracing::info;

use crate::client::ClientInner;
use crate::models::{AccountInfo, BalanceSnapshot};
use crate::Result;

/// Service for account operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: binance_futures_cli::FuturesClient) -> binance_futures_cli::Result<()> {
/// let balance = client.account().balance().await?;
/// println!(
///     "Total: {}  Available: {}",
///     balance.total_balance, balance.available_balance
/// );
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the full futures account payload.
    pub async fn account(&self) -> Result<AccountInfo> {
        self.inner.get_signed("/fapi/v2/account", Vec::new()).await
    }

    /// Fetch the account and project the balance view.
    ///
    /// The per-asset balance uses the configured balance asset
    /// (USDT unless overridden).
    pub async fn balance(&self) -> Result<BalanceSnapshot> {
        let asset = self.inner.config.balance_asset.clone();
        let account = self.account().await?;
        let snapshot = BalanceSnapshot::from_account(&account, &asset);

        info!(
            total = %snapshot.total_balance,
            available = %snapshot.available_balance,
            asset = %snapshot.asset,
            "account balance retrieved"
        );
        Ok(snapshot)
    }
}
