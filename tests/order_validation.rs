//! Validation paths that must fail before any network call is made.
//!
//! These run against a client built with dummy credentials: a test that
//! got past validation would hit the network and fail with a transport
//! error instead of the typed validation error asserted here.

use binance_futures_cli::models::{OrderRequest, OrderType, Side};
use binance_futures_cli::{ClientConfig, Credentials, Error, FuturesClient};
use rust_decimal_macros::dec;

fn offline_client() -> FuturesClient {
    FuturesClient::new(
        Credentials::new("test-key", "test-secret"),
        ClientConfig::default(),
    )
    .expect("client construction is offline")
}

#[tokio::test]
async fn market_order_rejects_nonpositive_quantity() {
    let client = offline_client();

    let err = client
        .orders()
        .market("BTCUSDT", Side::Buy, dec!(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {:?}", err);

    let err = client
        .orders()
        .market("BTCUSDT", Side::Sell, dec!(-0.5))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn limit_order_rejects_nonpositive_price() {
    let client = offline_client();

    let err = client
        .orders()
        .limit("ETHUSDT", Side::Buy, dec!(1), dec!(0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {:?}", err);
}

#[tokio::test]
async fn stop_limit_order_rejects_missing_stop_price() {
    let client = offline_client();

    let err = client
        .orders()
        .stop_limit("BTCUSDT", Side::Sell, dec!(1), dec!(60000), dec!(-1))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn empty_symbol_is_rejected_locally() {
    let client = offline_client();

    let err = client
        .orders()
        .place(OrderRequest::market("", Side::Buy, dec!(1)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {:?}", err);
}

#[tokio::test]
async fn unsupported_order_type_is_rejected_locally() {
    let client = offline_client();

    let mut request = OrderRequest::market("BTCUSDT", Side::Buy, dec!(1));
    request.order_type = OrderType::Other;

    let err = client.orders().place(request).await.unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn side_parsing_is_case_insensitive() {
    assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
    assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
    assert!("hold".parse::<Side>().unwrap_err().is_validation());
}
