//! Rug Munch CLI
//!
//! Developer harness for the action provider: inspect the tool catalog and
//! invoke actions against the live (or a local) risk API.

use clap::{Parser, Subcommand};
use rug_munch_agentkit::{ApiConfig, Error, Result, RugMunchActionProvider};
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "rug-munch")]
#[command(about = "Token risk intelligence for trading agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override RUG_MUNCH_API_BASE
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Override the standard request timeout (seconds)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tool catalog (names, descriptions, input schemas)
    Actions,

    /// Invoke an action and print its normalized result
    Call {
        /// Action name, e.g. check_token_risk
        action: String,

        /// Arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Show effective configuration (API key redacted)
    Config,

    /// Check whether a network is supported
    SupportsNetwork {
        /// Network identifier, e.g. solana or base
        network: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging on stderr so stdout stays machine readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    let config = load_config(cli.api_base.as_deref(), cli.timeout)?;

    match cli.command {
        Commands::Actions => {
            let provider = RugMunchActionProvider::new(config)?;
            println!("{}", serde_json::to_string_pretty(&provider.catalog())?);
        }
        Commands::Call { action, args } => {
            run_call(config, &action, &args).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config.summary())?);
        }
        Commands::SupportsNetwork { network } => {
            let provider = RugMunchActionProvider::new(config)?;
            println!("{}", provider.supports_network(&network));
        }
    }

    Ok(())
}

fn load_config(api_base: Option<&str>, timeout_secs: Option<u64>) -> Result<ApiConfig> {
    let mut config = ApiConfig::from_env()?;

    if let Some(base) = api_base {
        let key = config.api_key().map(str::to_string);
        config = ApiConfig::new(base)?.with_timeouts(config.timeouts);
        if let Some(key) = key {
            config = config.with_api_key(key);
        }
    }

    if let Some(secs) = timeout_secs {
        if secs == 0 {
            return Err(Error::Config("--timeout must be at least 1 second".to_string()));
        }
        config.timeouts.standard = Duration::from_secs(secs);
    }

    Ok(config)
}

async fn run_call(config: ApiConfig, action: &str, args: &str) -> Result<()> {
    let args: serde_json::Value = serde_json::from_str(args)?;

    tracing::info!(
        action = action,
        base_url = config.base_url(),
        authenticated = config.has_api_key(),
        "Invoking action"
    );

    let provider = RugMunchActionProvider::new(config)?;
    let result = provider.invoke(action, &args).await;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
