//! API services, grouped by endpoint family.

mod account;
mod market;
mod orders;

pub use account::AccountService;
pub use market::MarketDataService;
pub use orders::OrdersService;
