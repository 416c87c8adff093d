//! JSON-RPC request routing.

use std::sync::Arc;

use tracing::debug;

use woobridge_core::Dispatcher;
use woobridge_protocol::mcp::methods;
use woobridge_protocol::{
    JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse,
};

use crate::dispatch;

/// Either a success or an error response; both serialize to one line.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Serializes the response for the wire.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            JsonRpcOutput::Success(response) => serde_json::to_string(response),
            JsonRpcOutput::Error(response) => serde_json::to_string(response),
        }
    }
}

/// Routes JSON-RPC requests: the MCP handshake and tool methods are
/// answered locally, every other method name goes to the dispatcher.
pub struct McpHandler {
    dispatcher: Arc<Dispatcher>,
}

impl McpHandler {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Dispatches one request to a response.
    ///
    /// An envelope that does not carry `"jsonrpc": "2.0"` is treated
    /// as unparseable and answered with a parse error and `id: null`.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        if request.jsonrpc != "2.0" {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::parse_error(format!(
                "unsupported jsonrpc version: {:?}",
                request.jsonrpc
            )));
        }

        let id = request.id.clone();
        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id, &request.params),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(id),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(id, &request.params, &self.dispatcher)
                    .await
            }
            method => {
                dispatch::direct::handle_direct(id, method, &request.params, &self.dispatcher)
                    .await
            }
        }
    }

    /// Notifications produce no response; the only one expected is the
    /// `notifications/initialized` handshake acknowledgement.
    pub fn handle_notification(&self, notification: &JsonRpcNotification) {
        debug!(method = %notification.method, "notification received");
    }
}
