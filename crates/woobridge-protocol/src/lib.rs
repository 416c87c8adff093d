//! # woobridge-protocol
//!
//! JSON-RPC 2.0 and MCP type definitions for the woobridge gateway.
//! This crate defines the wire format exchanged between MCP clients
//! and the gateway over both the stdio and HTTP transports.

pub mod jsonrpc;
pub mod mcp;

pub use jsonrpc::*;
pub use mcp::methods;
