//! Interactive command shell.
//!
//! Parsing is separated from execution: [`Command::parse`] turns a line
//! into a typed command (or an [`Error::InvalidInput`] carrying a usage
//! hint), and [`run`] executes commands against a connected client. A
//! failed command prints its error and the loop keeps going.

use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;
use tracing::error;

use crate::client::FuturesClient;
use crate::models::{OrderId, OrderResult, Side, Symbol};
use crate::{Error, Result};

const MENU: &str = "\
Commands:
   1. balance                                        show account balance
   2. price <symbol>                                 current price
   3. market <symbol> <buy|sell> <qty>               place a market order
   4. limit <symbol> <buy|sell> <qty> <price>        place a limit order
   5. stop <symbol> <buy|sell> <qty> <price> <stop>  place a stop-limit order
   6. orders [symbol]                                list open orders
   7. status <symbol> <order_id>                     query an order
   8. cancel <symbol> <order_id>                     cancel an order
   9. help                                           show this menu
  10. quit                                           exit";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the account balance.
    Balance,
    /// Show the current price for a symbol.
    Price {
        /// Symbol to quote
        symbol: Symbol,
    },
    /// Place a market order.
    Market {
        /// Symbol to trade
        symbol: Symbol,
        /// Buy or sell
        side: Side,
        /// Order quantity
        quantity: Decimal,
    },
    /// Place a limit order.
    Limit {
        /// Symbol to trade
        symbol: Symbol,
        /// Buy or sell
        side: Side,
        /// Order quantity
        quantity: Decimal,
        /// Limit price
        price: Decimal,
    },
    /// Place a stop-limit order.
    Stop {
        /// Symbol to trade
        symbol: Symbol,
        /// Buy or sell
        side: Side,
        /// Order quantity
        quantity: Decimal,
        /// Limit price once triggered
        price: Decimal,
        /// Trigger price
        stop_price: Decimal,
    },
    /// List open orders, optionally for one symbol.
    Orders {
        /// Optional symbol filter
        symbol: Option<Symbol>,
    },
    /// Query a single order.
    Status {
        /// Symbol the order was placed on
        symbol: Symbol,
        /// Exchange order id
        order_id: OrderId,
    },
    /// Cancel a working order.
    Cancel {
        /// Symbol the order was placed on
        symbol: Symbol,
        /// Exchange order id
        order_id: OrderId,
    },
    /// Print the command menu.
    Help,
    /// Leave the shell.
    Quit,
}

impl Command {
    /// Parse a line of shell input.
    ///
    /// Commands are case-insensitive; a malformed line yields an
    /// [`Error::InvalidInput`] with a usage hint.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (head, args) = match tokens.split_first() {
            Some((head, args)) => (head.to_lowercase(), args),
            None => return Err(Error::InvalidInput("empty command".to_string())),
        };

        match head.as_str() {
            "balance" => Ok(Command::Balance),
            "price" => match args {
                [symbol] => Ok(Command::Price {
                    symbol: Symbol::new(symbol),
                }),
                _ => Err(usage("price <symbol>")),
            },
            "market" => match args {
                [symbol, side, qty] => Ok(Command::Market {
                    symbol: Symbol::new(symbol),
                    side: side.parse()?,
                    quantity: parse_decimal(qty, "quantity")?,
                }),
                _ => Err(usage("market <symbol> <buy|sell> <qty>")),
            },
            "limit" => match args {
                [symbol, side, qty, price] => Ok(Command::Limit {
                    symbol: Symbol::new(symbol),
                    side: side.parse()?,
                    quantity: parse_decimal(qty, "quantity")?,
                    price: parse_decimal(price, "price")?,
                }),
                _ => Err(usage("limit <symbol> <buy|sell> <qty> <price>")),
            },
            "stop" => match args {
                [symbol, side, qty, price, stop] => Ok(Command::Stop {
                    symbol: Symbol::new(symbol),
                    side: side.parse()?,
                    quantity: parse_decimal(qty, "quantity")?,
                    price: parse_decimal(price, "price")?,
                    stop_price: parse_decimal(stop, "stop price")?,
                }),
                _ => Err(usage("stop <symbol> <buy|sell> <qty> <price> <stop>")),
            },
            "orders" => match args {
                [] => Ok(Command::Orders { symbol: None }),
                [symbol] => Ok(Command::Orders {
                    symbol: Some(Symbol::new(symbol)),
                }),
                _ => Err(usage("orders [symbol]")),
            },
            "status" => match args {
                [symbol, id] => Ok(Command::Status {
                    symbol: Symbol::new(symbol),
                    order_id: parse_order_id(id)?,
                }),
                _ => Err(usage("status <symbol> <order_id>")),
            },
            "cancel" => match args {
                [symbol, id] => Ok(Command::Cancel {
                    symbol: Symbol::new(symbol),
                    order_id: parse_order_id(id)?,
                }),
                _ => Err(usage("cancel <symbol> <order_id>")),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(Error::InvalidInput(format!(
                "unknown command '{}' (try 'help')",
                other
            ))),
        }
    }
}

fn usage(hint: &str) -> Error {
    Error::InvalidInput(format!("usage: {}", hint))
}

fn parse_decimal(value: &str, field: &str) -> Result<Decimal> {
    value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid {}: '{}'", field, value)))
}

fn parse_order_id(value: &str) -> Result<OrderId> {
    value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid order id: '{}'", value)))
}

/// Run the interactive shell until `quit` or end of input.
pub async fn run(client: &FuturesClient) -> Result<()> {
    println!("\nConnected to {} futures.", client.environment());
    println!("{}", MENU);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush().map_err(|e| Error::Config(e.to_string()))?;

        let line = match lines.next() {
            Some(line) => line.map_err(|e| Error::Config(e.to_string()))?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        if command == Command::Quit {
            break;
        }
        if let Err(e) = execute(client, command).await {
            error!(error = %e, "command failed");
            println!("Error: {}", e);
        }
    }

    println!("Goodbye.");
    Ok(())
}

async fn execute(client: &FuturesClient, command: Command) -> Result<()> {
    match command {
        Command::Balance => {
            let balance = client.account().balance().await?;
            println!("Total balance:     {} {}", balance.total_balance, balance.asset);
            println!("Available balance: {} {}", balance.available_balance, balance.asset);
        }
        Command::Price { symbol } => {
            let price = client.market_data().price(symbol.clone()).await?;
            println!("{}: {}", symbol, price);
        }
        Command::Market {
            symbol,
            side,
            quantity,
        } => {
            let order = client.orders().market(symbol, side, quantity).await?;
            print_order(&order);
        }
        Command::Limit {
            symbol,
            side,
            quantity,
            price,
        } => {
            let order = client.orders().limit(symbol, side, quantity, price).await?;
            print_order(&order);
        }
        Command::Stop {
            symbol,
            side,
            quantity,
            price,
            stop_price,
        } => {
            let order = client
                .orders()
                .stop_limit(symbol, side, quantity, price, stop_price)
                .await?;
            print_order(&order);
        }
        Command::Orders { symbol } => {
            let orders = client.orders().open_orders(symbol).await?;
            if orders.is_empty() {
                println!("No open orders.");
            } else {
                for order in &orders {
                    print_order(order);
                    println!("---");
                }
                println!("{} open order(s)", orders.len());
            }
        }
        Command::Status { symbol, order_id } => {
            let order = client.orders().status(symbol, order_id).await?;
            print_order(&order);
        }
        Command::Cancel { symbol, order_id } => {
            let order = client.orders().cancel(symbol, order_id).await?;
            println!("Canceled order {}", order.order_id);
            print_order(&order);
        }
        Command::Help => println!("{}", MENU),
        // handled by the loop
        Command::Quit => {}
    }
    Ok(())
}

fn print_order(order: &OrderResult) {
    println!("Order {}  {}", order.order_id, order.symbol);
    println!("  {} {} {}", order.side, order.order_type, order.orig_qty);
    if let Some(stop_price) = order.stop_price.filter(|p| !p.is_zero()) {
        println!("  stop price: {}", stop_price);
    }
    println!("  price:    {}", order.price);
    println!("  status:   {}", order.status);
    println!("  executed: {}", order.executed_qty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_price() {
        let command = Command::parse("price btcusdt").unwrap();
        assert_eq!(
            command,
            Command::Price {
                symbol: Symbol::new("BTCUSDT")
            }
        );
    }

    #[test]
    fn test_parse_market_order() {
        let command = Command::parse("market BTCUSDT buy 0.01").unwrap();
        assert_eq!(
            command,
            Command::Market {
                symbol: Symbol::new("BTCUSDT"),
                side: Side::Buy,
                quantity: dec!(0.01),
            }
        );
    }

    #[test]
    fn test_parse_stop_order() {
        let command = Command::parse("stop ethusdt sell 1.5 2900 3000").unwrap();
        assert_eq!(
            command,
            Command::Stop {
                symbol: Symbol::new("ETHUSDT"),
                side: Side::Sell,
                quantity: dec!(1.5),
                price: dec!(2900),
                stop_price: dec!(3000),
            }
        );
    }

    #[test]
    fn test_parse_missing_args_gives_usage() {
        let err = Command::parse("market BTCUSDT").unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("usage"));
    }

    #[test]
    fn test_parse_bad_side() {
        let err = Command::parse("market BTCUSDT hold 1").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_bad_quantity() {
        let err = Command::parse("market BTCUSDT buy abc").unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_parse_orders_optional_symbol() {
        assert_eq!(
            Command::parse("orders").unwrap(),
            Command::Orders { symbol: None }
        );
        assert_eq!(
            Command::parse("orders btcusdt").unwrap(),
            Command::Orders {
                symbol: Some(Symbol::new("BTCUSDT"))
            }
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[test]
    fn test_menu_entries_are_numbered() {
        for (i, line) in MENU.lines().skip(1).enumerate() {
            assert!(
                line.trim_start().starts_with(&format!("{}.", i + 1)),
                "menu line not numbered: {}",
                line
            );
        }
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("EXIT").unwrap(), Command::Quit);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
    }
}
