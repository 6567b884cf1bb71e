//! CLI entry point: one-shot order placement or the interactive shell.

use std::io::{self, BufRead, Write as _};
use std::process::ExitCode;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::{error, info};

use binance_futures_cli::models::{OrderRequest, Side};
use binance_futures_cli::{
    logging, shell, ClientConfig, Credentials, Error, FuturesClient, Result,
};

#[derive(Debug, Parser)]
#[command(
    name = "binance-futures-cli",
    version,
    about = "Binance USD-M futures testnet trading client"
)]
struct Args {
    /// API key (prompted for if absent)
    #[arg(long, env = "BINANCE_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// API secret (prompted for if absent)
    #[arg(long, env = "BINANCE_API_SECRET", hide_env_values = true)]
    api_secret: Option<String>,

    /// Start the interactive shell after connecting
    #[arg(short, long)]
    interactive: bool,

    /// Symbol for one-shot order placement, e.g. BTCUSDT
    #[arg(long)]
    symbol: Option<String>,

    /// Order side: buy or sell
    #[arg(long)]
    side: Option<String>,

    /// Order quantity
    #[arg(long)]
    quantity: Option<Decimal>,

    /// Limit price (limit and stop orders)
    #[arg(long)]
    price: Option<Decimal>,

    /// Stop trigger price (stop orders)
    #[arg(long)]
    stop_price: Option<Decimal>,

    /// Order type: market, limit, or stop
    #[arg(long = "type", default_value = "market")]
    order_type: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let log_path = match logging::init() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Binance USD-M futures testnet client");
    println!("Logging to {}", log_path.display());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let credentials = resolve_credentials(&args)?;

    // Flag problems (bad side, missing price) surface before connecting.
    let one_shot = if args.interactive {
        None
    } else {
        one_shot_request(&args)?
    };

    let client = FuturesClient::connect(credentials, ClientConfig::default()).await?;
    info!(environment = %client.environment(), "session established");

    let balance = client.account().balance().await?;
    println!(
        "Balance: {} {} ({} available)",
        balance.total_balance, balance.asset, balance.available_balance
    );

    if let Some(request) = one_shot {
        let order = client.orders().place(request).await?;
        println!(
            "Placed order {}: {} {} {} ({})",
            order.order_id, order.side, order.orig_qty, order.symbol, order.status
        );
        return Ok(());
    }

    shell::run(&client).await
}

/// Credentials come from flags, environment variables, or a prompt.
fn resolve_credentials(args: &Args) -> Result<Credentials> {
    let api_key = match &args.api_key {
        Some(key) => key.clone(),
        None => prompt("API key: ")?,
    };
    let api_secret = match &args.api_secret {
        Some(secret) => secret.clone(),
        None => prompt("API secret: ")?,
    };

    if api_key.is_empty() || api_secret.is_empty() {
        return Err(Error::Config(
            "API key and secret are required".to_string(),
        ));
    }
    Ok(Credentials::new(api_key, api_secret))
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout()
        .flush()
        .map_err(|e| Error::Config(e.to_string()))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| Error::Config(e.to_string()))?;
    Ok(line.trim().to_string())
}

/// Build a one-shot order from the flags.
///
/// Only a complete symbol/side/quantity triple triggers one-shot
/// placement; anything less falls back to the shell.
fn one_shot_request(args: &Args) -> Result<Option<OrderRequest>> {
    let (symbol, side, quantity) = match (&args.symbol, &args.side, args.quantity) {
        (Some(symbol), Some(side), Some(quantity)) => (symbol, side, quantity),
        _ => return Ok(None),
    };
    let side: Side = side.parse()?;

    let request = match args.order_type.to_lowercase().as_str() {
        "market" => OrderRequest::market(symbol.as_str(), side, quantity),
        "limit" => {
            let price = args.price.ok_or_else(|| {
                Error::InvalidInput("limit orders need --price".to_string())
            })?;
            OrderRequest::limit(symbol.as_str(), side, quantity, price)
        }
        "stop" => {
            let price = args.price.ok_or_else(|| {
                Error::InvalidInput("stop orders need --price".to_string())
            })?;
            let stop_price = args.stop_price.ok_or_else(|| {
                Error::InvalidInput("stop orders need --stop-price".to_string())
            })?;
            OrderRequest::stop_limit(symbol.as_str(), side, quantity, price, stop_price)
        }
        other => {
            return Err(Error::InvalidInput(format!(
                "unknown order type '{}' (market, limit, or stop)",
                other
            )))
        }
    };
    Ok(Some(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use binance_futures_cli::models::OrderType;
    use rust_decimal_macros::dec;

    fn parse_args(flags: &[&str]) -> Args {
        Args::parse_from(std::iter::once("binance-futures-cli").chain(flags.iter().copied()))
    }

    #[test]
    fn test_partial_flags_fall_back_to_shell() {
        let args = parse_args(&["--symbol", "BTCUSDT"]);
        assert!(one_shot_request(&args).unwrap().is_none());

        let args = parse_args(&["--side", "buy", "--quantity", "0.01"]);
        assert!(one_shot_request(&args).unwrap().is_none());

        let args = parse_args(&[]);
        assert!(one_shot_request(&args).unwrap().is_none());
    }

    #[test]
    fn test_full_triple_builds_market_order() {
        let args = parse_args(&["--symbol", "btcusdt", "--side", "buy", "--quantity", "0.01"]);
        let request = one_shot_request(&args).unwrap().unwrap();
        assert_eq!(request.order_type, OrderType::Market);
        assert_eq!(request.symbol.as_str(), "BTCUSDT");
        assert_eq!(request.quantity, dec!(0.01));
    }

    #[test]
    fn test_limit_order_requires_price_flag() {
        let args = parse_args(&[
            "--symbol", "BTCUSDT", "--side", "sell", "--quantity", "1", "--type", "limit",
        ]);
        let err = one_shot_request(&args).unwrap_err();
        assert!(err.is_validation());

        let args = parse_args(&[
            "--symbol", "BTCUSDT", "--side", "sell", "--quantity", "1", "--type", "limit",
            "--price", "61000",
        ]);
        let request = one_shot_request(&args).unwrap().unwrap();
        assert_eq!(request.order_type, OrderType::Limit);
        assert_eq!(request.price, Some(dec!(61000)));
    }

    #[test]
    fn test_stop_order_requires_both_price_flags() {
        let args = parse_args(&[
            "--symbol", "BTCUSDT", "--side", "sell", "--quantity", "1", "--type", "stop",
            "--price", "60000",
        ]);
        assert!(one_shot_request(&args).unwrap_err().is_validation());
    }
}
