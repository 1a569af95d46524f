//! Exchange CLI
//!
//! Command-line interface for the Exchange API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use exchange_client::ExchangeClient;
use exchange_types::Decimal;

#[derive(Parser)]
#[command(name = "exchange")]
#[command(author, version, about = "Exchange API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Exchange API
    #[arg(
        long,
        env = "EXCHANGE_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Currency catalog operations
    Currency {
        #[command(subcommand)]
        action: CurrencyCommands,
    },
    /// Exchange rate operations
    Exchange {
        #[command(subcommand)]
        action: ExchangeCommands,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Currency code to convert from
        #[arg(long)]
        from: String,
        /// Currency code to convert to
        #[arg(long)]
        to: String,
        /// Amount to convert
        #[arg(long)]
        amount: Decimal,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum CurrencyCommands {
    /// Add a currency
    Create {
        /// Currency code, e.g. USD
        code: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Display sign
        #[arg(long)]
        sign: String,
    },
    /// Get a currency by code
    Get { code: String },
    /// List all currencies
    List,
}

#[derive(Subcommand)]
enum ExchangeCommands {
    /// Add a directed exchange rate
    Create {
        base: String,
        target: String,
        /// Units of target per one unit of base
        #[arg(long)]
        rate: Decimal,
    },
    /// Replace the rate of an exchange
    Update {
        base: String,
        target: String,
        #[arg(long)]
        rate: Decimal,
    },
    /// Get an exchange by pair
    Get { base: String, target: String },
    /// List all exchanges
    List,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ExchangeClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Currency { action } => match action {
            CurrencyCommands::Create { code, name, sign } => {
                print_json(&client.create_currency(&code, &name, &sign).await?)?;
            }
            CurrencyCommands::Get { code } => {
                print_json(&client.get_currency(&code).await?)?;
            }
            CurrencyCommands::List => {
                print_json(&client.list_currencies().await?)?;
            }
        },

        Commands::Exchange { action } => match action {
            ExchangeCommands::Create { base, target, rate } => {
                print_json(&client.create_exchange(&base, &target, rate).await?)?;
            }
            ExchangeCommands::Update { base, target, rate } => {
                print_json(&client.update_exchange(&base, &target, rate).await?)?;
            }
            ExchangeCommands::Get { base, target } => {
                print_json(&client.get_exchange(&base, &target).await?)?;
            }
            ExchangeCommands::List => {
                print_json(&client.list_exchanges().await?)?;
            }
        },

        Commands::Convert { from, to, amount } => {
            print_json(&client.convert(&from, &to, amount).await?)?;
        }
    }

    Ok(())
}
