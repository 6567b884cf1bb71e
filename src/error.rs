//! Error types for the futures trading client.
//!
//! Errors fall into two broad classes: validation errors raised before any
//! network call (`InvalidInput`, `InvalidSymbol`, `Config`) and
//! collaborator errors reported by the exchange or the transport layer.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The exchange returned an error response
    #[error("API error: status={status}, code={code:?}, message={message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Exchange error code (e.g. -2019)
        code: Option<i64>,
        /// Human-readable error message
        message: String,
    },

    /// The exchange rejected an order
    #[error("Order rejected (code {code}): {reason}")]
    OrderRejected {
        /// Exchange rejection code
        code: i64,
        /// Reason for rejection
        reason: String,
    },

    /// Could not establish or validate the session
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Invalid input provided by the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Symbol not present in the exchange's published symbol list
    #[error("Unknown symbol: {0}")]
    InvalidSymbol(String),

    /// Configuration error (missing credentials, bad flag combination)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Exchange error codes that indicate an order was refused rather than a
/// transport or request-format problem. -1013 is a filter failure, -2010
/// and -2011 are new-order/cancel rejections, the -2018..-2022 family
/// covers balance, margin, and reduce-only refusals.
const ORDER_REJECT_CODES: &[i64] = &[-1013, -2010, -2011, -2018, -2019, -2020, -2021, -2022];

impl Error {
    /// Returns `true` if this error was raised by input validation before
    /// any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::InvalidSymbol(_) | Error::Config(_)
        )
    }

    /// Returns `true` if the exchange refused an order.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::OrderRejected { .. })
    }

    /// Build an error from a non-success exchange response body.
    ///
    /// Binance reports failures as `{"code": <i64>, "msg": <string>}`.
    /// Known order-rejection codes are classified as [`Error::OrderRejected`];
    /// everything else becomes [`Error::Api`].
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body.get("code").and_then(Value::as_i64);
        let message = body
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or("Unknown API error")
            .to_string();

        match code {
            Some(c) if ORDER_REJECT_CODES.contains(&c) => Error::OrderRejected {
                code: c,
                reason: message,
            },
            _ => Error::Api {
                status,
                code,
                message,
            },
        }
    }
}
