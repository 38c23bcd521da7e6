//! Command-line front end for the wallet provider client.
//!
//! ```text
//! wallet-provider [--config PATH] [--host HOST] <command>
//!     generate-wallet        → new address + secret (printed once)
//!     create-account ...     → ledger account as JSON
//!     fetch-content <ID>     → IPFS document as JSON
//! ```
//!
//! Configuration comes from the optional TOML file, then `TATUM_API_KEY` /
//! `TATUM_API_ENDPOINT` / `WALLET_PROVIDER_LOG_LEVEL`, then `--host`.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;

use wallet_provider::config::{load_config, AppConfig, ConfigError};
use wallet_provider::observability::{logging, metrics};
use wallet_provider::provider::{Customer, LedgerAccountRequest, WalletProviderClient};

#[derive(Parser)]
#[command(name = "wallet-provider")]
#[command(
    about = "Ledger account and wallet provisioning against the provider API",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the provider host (e.g. api-us-west1.tatum.io).
    #[arg(long)]
    host: Option<String>,

    /// Override the log level.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new wallet; the secret is shown once
    GenerateWallet,
    /// Create a ledger account
    CreateAccount(CreateAccountArgs),
    /// Fetch a JSON document from IPFS
    FetchContent {
        /// Content identifier (CID)
        id: String,
    },
}

#[derive(clap::Args)]
struct CreateAccountArgs {
    /// Account currency (e.g. ALGO)
    #[arg(long)]
    currency: String,

    /// Extended public key backing the account
    #[arg(long)]
    xpub: Option<String>,

    /// Customer identifier in the calling system; enables the customer block
    #[arg(long)]
    external_id: Option<String>,

    #[arg(long, requires = "external_id")]
    customer_country: Option<String>,

    #[arg(long, requires = "external_id")]
    provider_country: Option<String>,

    #[arg(long, requires = "external_id")]
    customer_accounting_currency: Option<String>,

    /// Mark the account as compliant
    #[arg(long)]
    compliant: bool,

    #[arg(long)]
    account_code: Option<String>,

    #[arg(long)]
    accounting_currency: Option<String>,

    #[arg(long)]
    account_number: Option<String>,
}

impl From<CreateAccountArgs> for LedgerAccountRequest {
    fn from(args: CreateAccountArgs) -> Self {
        let customer = args.external_id.map(|external_id| Customer {
            external_id,
            accounting_currency: args.customer_accounting_currency,
            customer_country: args.customer_country,
            provider_country: args.provider_country,
        });

        Self {
            currency: args.currency,
            xpub: args.xpub,
            customer,
            compliant: args.compliant.then_some(true),
            account_code: args.account_code,
            accounting_currency: args.accounting_currency,
            account_number: args.account_number,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = logging::init_logging(&config.observability.log_level) {
        eprintln!("Warning: logging not initialized: {}", e);
    }

    let metrics_handle = if config.observability.metrics_enabled {
        match metrics::init_metrics() {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install metrics recorder");
                None
            }
        }
    } else {
        None
    };

    let result = run(cli.command, &config).await;

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// File, then environment, then command-line flags; validated last.
fn resolve_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    load_config(cli.config.as_deref(), |config| {
        if let Some(host) = &cli.host {
            config.provider.endpoint_host = host.clone();
        }
        if let Some(level) = &cli.log_level {
            config.observability.log_level = level.clone();
        }
    })
}

async fn run(command: Commands, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let client = WalletProviderClient::new(config.provider.clone())?;

    match command {
        Commands::GenerateWallet => {
            let wallet = client.generate_wallet().await?;
            println!("address: {}", wallet.address);
            println!("secret:  {}", wallet.secret.expose_secret());
            eprintln!("Store the secret now; it will not be shown again.");
        }
        Commands::CreateAccount(args) => {
            let request = LedgerAccountRequest::from(args);
            let account = client.create_ledger_account(&request).await?;
            print_json(&serde_json::to_value(&account)?)?;
        }
        Commands::FetchContent { id } => {
            let content = client.fetch_content(&id).await?;
            print_json(&Value::Object(content))?;
        }
    }

    Ok(())
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
