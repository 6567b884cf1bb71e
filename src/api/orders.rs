//! Orders service: placement, status, and cancellation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::MarketDataService;
use crate::client::ClientInner;
use crate::models::{OrderId, OrderRequest, OrderResult, Side, Symbol};
use crate::Result;

/// Service for order operations.
///
/// Every placement path validates the request fields locally and resolves
/// the symbol against the exchange before anything is signed and sent, so
/// malformed input never reaches the matching engine.
///
/// # Example
///
/// ```no_run
/// use binance_futures_cli::models::Side;
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: binance_futures_cli::FuturesClient) -> binance_futures_cli::Result<()> {
/// let order = client.orders().market("BTCUSDT", Side::Buy, dec!(0.01)).await?;
/// println!("order {} is {}", order.order_id, order.status);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Place an order.
    ///
    /// Runs local field validation, then resolves the symbol against the
    /// exchange's published list, then submits. A rejection from the
    /// exchange comes back as [`Error::OrderRejected`](crate::Error::OrderRejected).
    pub async fn place(&self, request: OrderRequest) -> Result<OrderResult> {
        request.validate()?;

        MarketDataService::new(self.inner.clone())
            .symbol_info(request.symbol.clone())
            .await?;

        info!(
            symbol = %request.symbol,
            side = %request.side,
            order_type = %request.order_type,
            quantity = %request.quantity,
            "placing order"
        );

        let result: OrderResult = self
            .inner
            .post_signed("/fapi/v1/order", request.wire_params())
            .await
            .map_err(|e| {
                warn!(symbol = %request.symbol, error = %e, "order placement failed");
                e
            })?;

        info!(
            order_id = %result.order_id,
            status = %result.status,
            "order accepted"
        );
        Ok(result)
    }

    /// Place a market order.
    pub async fn market(
        &self,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Decimal,
    ) -> Result<OrderResult> {
        self.place(OrderRequest::market(symbol, side, quantity)).await
    }

    /// Place a limit order (GTC unless overridden on the request).
    pub async fn limit(
        &self,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<OrderResult> {
        self.place(OrderRequest::limit(symbol, side, quantity, price))
            .await
    }

    /// Place a stop-limit order: a limit order armed when the stop
    /// price is touched.
    pub async fn stop_limit(
        &self,
        symbol: impl Into<Symbol>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Result<OrderResult> {
        self.place(OrderRequest::stop_limit(
            symbol, side, quantity, price, stop_price,
        ))
        .await
    }

    /// Query a single order by id.
    pub async fn status(
        &self,
        symbol: impl Into<Symbol>,
        order_id: OrderId,
    ) -> Result<OrderResult> {
        let symbol = symbol.into();
        self.inner
            .get_signed(
                "/fapi/v1/order",
                vec![
                    ("symbol", symbol.to_string()),
                    ("orderId", order_id.to_string()),
                ],
            )
            .await
    }

    /// Cancel a working order.
    pub async fn cancel(
        &self,
        symbol: impl Into<Symbol>,
        order_id: OrderId,
    ) -> Result<OrderResult> {
        let symbol = symbol.into();
        let result: OrderResult = self
            .inner
            .delete_signed(
                "/fapi/v1/order",
                vec![
                    ("symbol", symbol.to_string()),
                    ("orderId", order_id.to_string()),
                ],
            )
            .await?;

        info!(order_id = %result.order_id, status = %result.status, "order canceled");
        Ok(result)
    }

    /// List open orders, optionally restricted to one symbol.
    pub async fn open_orders(
        &self,
        symbol: Option<Symbol>,
    ) -> Result<Vec<OrderResult>> {
        let mut params = Vec::new();
        if let Some(symbol) = symbol {
            params.push(("symbol", symbol.to_string()));
        }
        self.inner.get_signed("/fapi/v1/openOrders", params).await
    }
}
