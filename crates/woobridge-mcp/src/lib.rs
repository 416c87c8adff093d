//! # woobridge-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC
//! requests to the MCP protocol methods, and for passing every other
//! method name straight to the store dispatcher.

mod dispatch;
pub mod handler;

pub use handler::{JsonRpcOutput, McpHandler};
