//! `woobridge serve` command.
//!
//! Starts the JSON-RPC server over stdio or HTTP, exposing the gateway
//! methods via JSON-RPC 2.0.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Args;

use woobridge_config::AppConfig;
use woobridge_transport_http::{EventHub, HttpServer};
use woobridge_transport_stdio::{McpHandler, McpServer, StdioTransport};

use crate::shared;

/// Start the JSON-RPC server (stdio or HTTP).
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Transport mode: stdio (default) or http.
    #[arg(long, default_value = "stdio", value_parser = ["stdio", "http"])]
    pub transport: String,
    /// TCP port for the HTTP transport (overrides the configured port).
    #[arg(long)]
    pub port: Option<u16>,
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &AppConfig) -> anyhow::Result<()> {
    match args.transport.as_str() {
        "http" => {
            let events = Arc::new(EventHub::default());
            let dispatcher = shared::create_dispatcher(config).with_sink(events.clone());
            let handler = Arc::new(McpHandler::new(Arc::new(dispatcher)));
            let addr = bind_addr(config, args.port)?;
            let server = HttpServer::new(handler, events, addr);
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
        _ => {
            let dispatcher = shared::create_dispatcher(config);
            let handler = McpHandler::new(Arc::new(dispatcher));
            let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
            let mut server = McpServer::new(transport, handler);
            tracing::info!("woobridge server ready on stdio");
            tokio::select! {
                result = server.run() => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}

/// Combines the configured bind host with the effective port.
fn bind_addr(config: &AppConfig, port_override: Option<u16>) -> anyhow::Result<SocketAddr> {
    let port = port_override.unwrap_or(config.server.port);
    let ip: std::net::IpAddr = config
        .server
        .bind
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid bind address {:?}: {e}", config.server.bind))?;
    Ok(SocketAddr::new(ip, port))
}
