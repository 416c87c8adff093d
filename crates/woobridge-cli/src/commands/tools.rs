//! `woobridge tools` command.
//!
//! Lists the gateway's method registry without starting a server.

use clap::Args;

use woobridge_core::registry;
use woobridge_core::registry::MethodDescriptor;

use crate::output;

/// List the supported gateway methods.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Only show methods whose name contains this substring.
    #[arg(short, long)]
    pub filter: Option<String>,
    /// Emit the list as JSON, including each method's input schema.
    #[arg(long)]
    pub json: bool,
}

/// Executes the tools command.
pub fn execute(args: &ToolsArgs) -> anyhow::Result<()> {
    let matches = matching(args.filter.as_deref());

    if args.json {
        let listing: Vec<_> = matches
            .iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "description": d.description,
                    "inputSchema": d.input_schema(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        for descriptor in &matches {
            println!("{:<36} {}", descriptor.name, descriptor.description);
        }
        output::print_success(&format!("{} methods", matches.len()));
    }

    Ok(())
}

fn matching(filter: Option<&str>) -> Vec<&'static MethodDescriptor> {
    registry::all()
        .filter(|d| filter.is_none_or(|needle| d.name.contains(needle)))
        .collect()
}
