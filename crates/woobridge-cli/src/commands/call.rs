//! `woobridge call` command.
//!
//! Dispatches one gateway method straight through the dispatcher,
//! without a JSON-RPC envelope or a running server. Useful for smoke
//! tests and shell scripting.

use clap::Args;

use woobridge_config::AppConfig;

use crate::{input, output, shared};

/// Call one gateway method and print the store's response.
#[derive(Debug, Args)]
pub struct CallArgs {
    /// Method name (e.g. get_products).
    pub method: String,
    /// JSON params object.
    #[arg(short, long, default_value = "{}")]
    pub input: String,
    /// Read JSON params from a file (use "-" for stdin).
    #[arg(short = 'f', long)]
    pub input_file: Option<String>,
}

/// Executes the call command.
pub async fn execute(args: &CallArgs, config: &AppConfig) -> anyhow::Result<()> {
    let resolved = input::resolve_input(&args.input, args.input_file.as_deref())?;
    let params: serde_json::Value = serde_json::from_str(&resolved)
        .map_err(|e| anyhow::anyhow!("invalid JSON params: {e}"))?;

    let dispatcher = shared::create_dispatcher(config);

    tracing::info!(method = %args.method, "dispatching method");

    let result = dispatcher
        .dispatch(&args.method, &params)
        .await
        .map_err(|e| {
            output::print_diagnostics(&e);
            anyhow::anyhow!("call failed: {e}")
        })?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
