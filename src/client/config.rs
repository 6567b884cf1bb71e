//! Client configuration and credentials.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::models::Environment;

/// API credentials.
///
/// The secret is wrapped in [`SecretString`] so it is zeroized on drop and
/// never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// API key, sent in the `X-MBX-APIKEY` header
    pub api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a key/secret pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::new(api_secret.into()),
        }
    }

    /// Expose the secret for request signing.
    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.api_secret.expose_secret().as_bytes()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the futures client.
///
/// # Example
///
/// ```
/// use binance_futures_cli::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_environment(Environment::Testnet)
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Which endpoint set to target
    pub environment: Environment,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// `recvWindow` for signed requests, in milliseconds
    pub recv_window_ms: u64,
    /// Asset used for the per-asset balance projection
    pub balance_asset: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Testnet,
            timeout: Duration::from_secs(30),
            user_agent: format!("binance-futures-cli/{} (Rust)", env!("CARGO_PKG_VERSION")),
            recv_window_ms: 5000,
            balance_asset: "USDT".to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the `recvWindow` for signed requests.
    pub fn with_recv_window(mut self, millis: u64) -> Self {
        self.recv_window_ms = millis;
        self
    }

    /// Set the asset reported in balance snapshots.
    pub fn with_balance_asset(mut self, asset: impl Into<String>) -> Self {
        self.balance_asset = asset.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.environment.is_testnet());
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.recv_window_ms, 5000);
        assert_eq!(config.balance_asset, "USDT");
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("key", "very-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("key"));
        assert!(!debug.contains("very-secret"));
    }
}
