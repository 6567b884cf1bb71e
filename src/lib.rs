//! A command-line client for Binance USD-M futures, aimed at the testnet.
//!
//! The crate provides a typed client over the futures REST API plus the
//! interactive shell used by the binary. Signed requests, the error
//! taxonomy, and the data models live here so they can be tested without
//! touching the network.
//!
//! # Example
//!
//! ```no_run
//! use binance_futures_cli::{ClientConfig, Credentials, FuturesClient};
//! use binance_futures_cli::models::Side;
//! use rust_decimal_macros::dec;
//!
//! # async fn example() -> binance_futures_cli::Result<()> {
//! let client = FuturesClient::connect(
//!     Credentials::new("api-key", "api-secret"),
//!     ClientConfig::default(),
//! )
//! .await?;
//!
//! let price = client.market_data().price("BTCUSDT").await?;
//! println!("BTCUSDT: {}", price);
//!
//! let order = client.orders().market("BTCUSDT", Side::Buy, dec!(0.01)).await?;
//! println!("order {} is {}", order.order_id, order.status);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod client;
pub mod error;
pub mod logging;
pub mod models;
pub mod shell;

pub use client::{ClientConfig, Credentials, FuturesClient};
pub use error::{Error, Result};
pub use models::{Environment, OrderId, Symbol};
