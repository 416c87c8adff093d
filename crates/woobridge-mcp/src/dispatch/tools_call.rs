//! Handles the `tools/call` MCP method.

use serde_json::Value;

use woobridge_core::Dispatcher;
use woobridge_protocol::mcp::tools::{ToolContent, ToolsCallParams, ToolsCallResult};
use woobridge_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcResponse, RequestId};

use crate::handler::JsonRpcOutput;

/// Handles the `tools/call` request.
///
/// Store and upstream failures do not become JSON-RPC errors; per the
/// MCP contract they come back as a result with `isError: true` so the
/// client can show them to the model.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    dispatcher: &Dispatcher,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                ));
            }
        },
        None => {
            return JsonRpcOutput::Error(JsonRpcErrorResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            ));
        }
    };

    // 2. Execute via the store dispatcher
    tracing::debug!(tool = %call_params.name, "executing tool via MCP");
    let (text, is_error) = match dispatcher
        .dispatch(&call_params.name, &call_params.arguments)
        .await
    {
        Ok(result) => (render(result), false),
        Err(e) => (e.to_string(), true),
    };

    let call_result = ToolsCallResult {
        content: vec![ToolContent::Text { text }],
        is_error,
    };

    match serde_json::to_value(call_result) {
        Ok(v) => JsonRpcOutput::Success(JsonRpcResponse::success(id, v)),
        Err(e) => JsonRpcOutput::Error(JsonRpcErrorResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            e.to_string(),
        )),
    }
}

/// String results pass through bare; everything else is compact JSON.
fn render(result: Value) -> String {
    match result {
        Value::String(text) => text,
        other => other.to_string(),
    }
}
