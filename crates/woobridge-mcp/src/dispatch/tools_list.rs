//! Handles the `tools/list` MCP method.

use woobridge_core::registry;
use woobridge_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use woobridge_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `tools/list` request.
///
/// The registry is static, so the whole catalogue is returned in one
/// page and `next_cursor` stays empty.
pub(crate) fn handle_tools_list(id: RequestId) -> JsonRpcOutput {
    let definitions: Vec<McpToolDefinition> = registry::all()
        .map(|descriptor| McpToolDefinition {
            name: descriptor.name.to_string(),
            description: Some(descriptor.description.to_string()),
            input_schema: descriptor.input_schema(),
        })
        .collect();

    let result = ToolsListResult {
        tools: definitions,
        next_cursor: None,
    };

    match serde_json::to_value(result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}
