//! woobridge CLI - JSON-RPC gateway for WooCommerce and WordPress stores.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// woobridge - expose a WooCommerce/WordPress store over JSON-RPC.
#[derive(Debug, Parser)]
#[command(name = "woobridge", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the JSON-RPC server over stdio or HTTP.
    Serve(commands::serve::ServeArgs),
    /// List the supported gateway methods.
    Tools(commands::tools::ToolsArgs),
    /// Call one gateway method directly and print the store's response.
    Call(commands::call::CallArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = woobridge_config::load_config(cli.config.as_deref())?;

    // -v flags take precedence over the configured log level.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!(config = ?cli.config, "woobridge starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Tools(args) => commands::tools::execute(args),
        Commands::Call(args) => commands::call::execute(args, &config).await,
    }
}
