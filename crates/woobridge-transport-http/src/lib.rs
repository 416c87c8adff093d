//! HTTP/JSON-RPC transport adapter for the woobridge gateway.
//! Exposes the JSON-RPC surface over `POST /mcp` and re-broadcasts store
//! mutations as SSE streams and a polling endpoint.

mod error;
pub mod events;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use events::{ChannelEvent, EventHub};
pub use router::{build_router, AppState};
pub use server::HttpServer;

// McpHandler lives in woobridge-mcp (application layer); re-exported for
// convenience.
pub use woobridge_mcp::McpHandler;
