//! Data models for the futures API.
//!
//! Typed records are constructed at the collaborator boundary so the rest
//! of the client never touches untyped payloads. Organized by domain:
//!
//! - [`primitives`] - Core types like `Symbol`, `OrderId`, `Environment`
//! - [`enums`] - Side, order type, time in force, order status
//! - [`account`] - Account payload and the derived balance snapshot
//! - [`exchange`] - Published symbol list
//! - [`order`] - Order request and exchange order payloads
//! - [`market_data`] - Ticker price

pub mod account;
pub mod enums;
pub mod exchange;
pub mod market_data;
pub mod order;
pub mod primitives;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use exchange::*;
pub use market_data::*;
pub use order::*;
pub use primitives::*;
