//! Account and balance models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Futures account information as returned by the exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// Total wallet balance across all assets, in the margin asset
    pub total_wallet_balance: Decimal,
    /// Balance available for new positions
    pub available_balance: Decimal,
    /// Total unrealized profit and loss
    #[serde(default)]
    pub total_unrealized_profit: Option<Decimal>,
    /// Per-asset balances
    #[serde(default)]
    pub assets: Vec<AssetBalance>,
}

/// Balance of a single asset in the futures wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Asset name (e.g., "USDT")
    pub asset: String,
    /// Wallet balance for this asset
    pub wallet_balance: Decimal,
    /// Available balance for this asset
    #[serde(default)]
    pub available_balance: Option<Decimal>,
    /// Unrealized profit for this asset
    #[serde(default)]
    pub unrealized_profit: Option<Decimal>,
}

/// Derived balance view shown to the user.
///
/// Projected out of [`AccountInfo`] at the collaborator boundary: total and
/// available balances plus a single asset's wallet balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSnapshot {
    /// Total wallet balance
    pub total_balance: Decimal,
    /// Balance available for new positions
    pub available_balance: Decimal,
    /// Asset the per-asset balance refers to
    pub asset: String,
    /// Wallet balance for that asset (zero if the asset is absent)
    pub asset_balance: Decimal,
}

impl BalanceSnapshot {
    /// Project a snapshot for `asset` out of the account payload.
    pub fn from_account(account: &AccountInfo, asset: &str) -> Self {
        let asset_balance = account
            .assets
            .iter()
            .find(|a| a.asset == asset)
            .map(|a| a.wallet_balance)
            .unwrap_or_default();

        Self {
            total_balance: account.total_wallet_balance,
            available_balance: account.available_balance,
            asset: asset.to_string(),
            asset_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_account() -> AccountInfo {
        serde_json::from_str(
            r#"{
                "totalWalletBalance": "1000.00",
                "availableBalance": "850.25",
                "totalUnrealizedProfit": "-3.50",
                "assets": [
                    {"asset": "USDT", "walletBalance": "990.00", "availableBalance": "850.25"},
                    {"asset": "BNB", "walletBalance": "0.10"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_balance_projection() {
        let snapshot = BalanceSnapshot::from_account(&sample_account(), "USDT");
        assert_eq!(snapshot.total_balance, dec!(1000.00));
        assert_eq!(snapshot.available_balance, dec!(850.25));
        assert_eq!(snapshot.asset, "USDT");
        assert_eq!(snapshot.asset_balance, dec!(990.00));
    }

    #[test]
    fn test_missing_asset_defaults_to_zero() {
        let snapshot = BalanceSnapshot::from_account(&sample_account(), "BUSD");
        assert_eq!(snapshot.asset_balance, Decimal::ZERO);
        assert_eq!(snapshot.total_balance, dec!(1000.00));
    }
}
