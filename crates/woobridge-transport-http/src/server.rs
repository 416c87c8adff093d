//! HTTP server that binds an axum Router to a TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use woobridge_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::events::EventHub;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the JSON-RPC transport.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `handler` - shared JSON-RPC dispatcher
    /// * `events` - mutation change feed backing the SSE and poll routes
    /// * `addr` - socket address to listen on
    pub fn new(handler: Arc<McpHandler>, events: Arc<EventHub>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { handler, events },
        }
    }

    /// Starts the server and blocks until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener =
            TcpListener::bind(self.addr)
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.to_string(),
                    source: e,
                })?;

        tracing::info!(addr = %self.addr, "woobridge HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        Ok(())
    }
}
